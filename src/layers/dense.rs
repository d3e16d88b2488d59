use crate::{activation::activation::Activation, math::matrix::Matrix};
use rand::Rng;

/// Fully-connected layer that processes the whole training batch at once.
///
/// The bias matrix carries one row per batch row, so every batch row trains
/// its own bias entries and the bias gradient is the raw backprop delta.
#[derive(Debug)]
pub struct Dense {
    /// (input_size, units)
    pub weights: Matrix,
    /// (batch_rows, units)
    pub biases: Matrix,
    pre_activations: Matrix, // z = X·W + B, cached for the backward pass
    activations: Matrix,     // a = act(z)
    pub activation: Activation,
}

impl Dense {
    /// Weights start truncated-normal, biases at zero.
    pub fn new<R: Rng>(
        batch_rows: usize,
        input_size: usize,
        units: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Dense {
        Dense {
            weights: Matrix::truncated_normal(input_size, units, rng),
            biases: Matrix::zeros(batch_rows, units),
            pre_activations: Matrix::zeros(batch_rows, units),
            activations: Matrix::zeros(batch_rows, units),
            activation,
        }
    }

    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let activation = self.activation;
        let z = &(input * &self.weights) + &self.biases;
        let a = z.map(|x| activation.function(x));
        self.pre_activations = z;
        self.activations = a.clone();
        a
    }

    /// Activations cached by the most recent `forward` call.
    pub fn activations(&self) -> &Matrix {
        &self.activations
    }

    /// Gradients w.r.t. this layer's parameters, given ∂L/∂a (`upstream`)
    /// and the input that produced the cached activations.
    ///
    /// Returns (weight_grad, bias_grad). The bias gradient equals the layer
    /// delta δ = upstream ⊙ act'(z); multiplying it by Wᵀ yields ∂L/∂input
    /// for the layer below.
    pub fn gradients(&self, upstream: &Matrix, input: &Matrix) -> (Matrix, Matrix) {
        let activation = self.activation;
        let act_derivative = self.pre_activations.map(|z| activation.derivative(z));
        let delta = hadamard(upstream, &act_derivative);
        let weight_grad = &input.transpose() * &delta;
        (weight_grad, delta)
    }

    /// param ← param − lr × grad, for weights and biases.
    pub fn apply_gradients(&mut self, weight_grad: &Matrix, bias_grad: &Matrix, lr: f64) {
        self.weights = &self.weights - &weight_grad.map(|g| g * lr);
        self.biases = &self.biases - &bias_grad.map(|g| g * lr);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
        .collect();
    Matrix::from_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn relu_layer() -> Dense {
        let mut layer = Dense::new(2, 2, 2, Activation::ReLU, &mut StdRng::seed_from_u64(1));
        layer.weights = Matrix::from_data(vec![vec![1.0, -1.0], vec![2.0, 0.5]]);
        layer.biases = Matrix::from_data(vec![vec![0.0, 0.0], vec![-1.0, 1.0]]);
        layer
    }

    #[test]
    fn forward_applies_affine_then_activation() {
        let mut layer = relu_layer();
        let input = Matrix::from_data(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        let out = layer.forward(&input);
        // row 0: z = [3.0, -0.5] -> relu -> [3.0, 0.0]
        // row 1: z = [1.0, 1.5]  -> relu -> [1.0, 1.5]
        assert_eq!(out.data, vec![vec![3.0, 0.0], vec![1.0, 1.5]]);
        assert_eq!(layer.activations().data, out.data);
    }

    #[test]
    fn gradient_shapes_match_parameters() {
        let mut layer = relu_layer();
        let input = Matrix::from_data(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        layer.forward(&input);
        let upstream = Matrix::from_data(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
        let (w_grad, b_grad) = layer.gradients(&upstream, &input);
        assert_eq!((w_grad.rows, w_grad.cols), (2, 2));
        assert_eq!((b_grad.rows, b_grad.cols), (2, 2));
    }

    #[test]
    fn relu_delta_is_masked_by_dead_units() {
        let mut layer = relu_layer();
        let input = Matrix::from_data(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        layer.forward(&input);
        let upstream = Matrix::from_data(vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let (_, b_grad) = layer.gradients(&upstream, &input);
        // z[0][1] = -0.5 is below zero, so no gradient flows through it.
        assert_eq!(b_grad.data[0][1], 0.0);
        assert_eq!(b_grad.data[0][0], 1.0);
    }

    #[test]
    fn apply_gradients_moves_against_the_gradient() {
        let mut layer = relu_layer();
        let w_before = layer.weights.data[0][0];
        let w_grad = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 0.0]]);
        let b_grad = Matrix::zeros(2, 2);
        layer.apply_gradients(&w_grad, &b_grad, 0.5);
        assert!((layer.weights.data[0][0] - (w_before - 0.5)).abs() < 1e-12);
    }
}
