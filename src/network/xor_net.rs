use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::activation::Activation;
use crate::layers::dense::Dense;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::optim::sgd::Sgd;

/// The network is wired for exactly this many dataset rows; the per-row bias
/// matrices make it inseparable from its 4-example batch.
pub const BATCH_ROWS: usize = 4;
pub const INPUT_FEATURES: usize = 2;
pub const HIDDEN_UNITS: usize = 2;
pub const OUTPUT_UNITS: usize = 1;

/// The fixed 2 → 2 (ReLU) → 1 (sigmoid) network.
///
/// Parameter shapes never change: hidden weights 2×2, hidden biases 4×2,
/// output weights 2×1, output biases 4×1.
pub struct XorNet {
    pub hidden: Dense,
    pub output: Dense,
}

/// Gradient of the loss w.r.t. every parameter matrix, all evaluated at the
/// same parameter values.
pub struct Gradients {
    pub hidden_weights: Matrix,
    pub hidden_biases: Matrix,
    pub output_weights: Matrix,
    pub output_biases: Matrix,
}

impl XorNet {
    /// Draw order matters for reproducibility: hidden weights first, then
    /// output weights. Biases start at zero.
    pub fn new<R: Rng>(rng: &mut R) -> XorNet {
        XorNet {
            hidden: Dense::new(BATCH_ROWS, INPUT_FEATURES, HIDDEN_UNITS, Activation::ReLU, rng),
            output: Dense::new(BATCH_ROWS, HIDDEN_UNITS, OUTPUT_UNITS, Activation::Sigmoid, rng),
        }
    }

    /// Deterministic initialization; the same seed yields the same network.
    pub fn seeded(seed: u64) -> XorNet {
        let mut rng = StdRng::seed_from_u64(seed);
        XorNet::new(&mut rng)
    }

    pub fn random() -> XorNet {
        XorNet::new(&mut rand::thread_rng())
    }

    /// hidden = relu(x·W + c); output = sigmoid(hidden·w + b).
    /// A 4×2 input always yields a 4×1 output.
    pub fn forward(&mut self, x: &Matrix) -> Matrix {
        let hidden = self.hidden.forward(x);
        self.output.forward(&hidden)
    }

    pub fn loss(&mut self, x: &Matrix, y: &Matrix) -> f64 {
        let predicted = self.forward(x);
        MseLoss::loss(&predicted, y)
    }

    /// Reverse pass with the per-layer closed forms. Returns the loss
    /// together with the gradients; nothing is updated yet.
    pub fn gradients(&mut self, x: &Matrix, y: &Matrix) -> (f64, Gradients) {
        let predicted = self.forward(x);
        let loss = MseLoss::loss(&predicted, y);

        let output_delta = MseLoss::derivative(&predicted, y);
        let (output_weights, output_biases) =
            self.output.gradients(&output_delta, self.hidden.activations());

        // ∂L/∂hidden activations, taken through the not-yet-updated output weights.
        let hidden_upstream = &output_biases * &self.output.weights.transpose();
        let (hidden_weights, hidden_biases) = self.hidden.gradients(&hidden_upstream, x);

        (
            loss,
            Gradients {
                hidden_weights,
                hidden_biases,
                output_weights,
                output_biases,
            },
        )
    }

    /// One full-batch gradient-descent update over all four rows.
    /// Returns the loss measured before the update was applied.
    pub fn step(&mut self, x: &Matrix, y: &Matrix, optimizer: &Sgd) -> f64 {
        let (loss, grads) = self.gradients(x, y);
        optimizer.step(&mut self.output, &grads.output_weights, &grads.output_biases);
        optimizer.step(&mut self.hidden, &grads.hidden_weights, &grads.hidden_biases);
        loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn forward_maps_four_by_two_to_four_by_one() {
        let mut net = XorNet::seeded(0);
        let out = net.forward(&dataset::xor_inputs());
        assert_eq!((out.rows, out.cols), (BATCH_ROWS, OUTPUT_UNITS));
        // Sigmoid output stays strictly inside (0, 1).
        assert!(out.data.iter().flatten().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn parameter_shapes_are_fixed() {
        let net = XorNet::seeded(1);
        assert_eq!((net.hidden.weights.rows, net.hidden.weights.cols), (2, 2));
        assert_eq!((net.hidden.biases.rows, net.hidden.biases.cols), (4, 2));
        assert_eq!((net.output.weights.rows, net.output.weights.cols), (2, 1));
        assert_eq!((net.output.biases.rows, net.output.biases.cols), (4, 1));
    }

    #[test]
    fn biases_start_at_zero() {
        let net = XorNet::seeded(2);
        assert!(net.hidden.biases.data.iter().flatten().all(|&v| v == 0.0));
        assert!(net.output.biases.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn same_seed_yields_identical_networks() {
        let a = XorNet::seeded(42);
        let b = XorNet::seeded(42);
        assert_eq!(a.hidden.weights, b.hidden.weights);
        assert_eq!(a.output.weights, b.output.weights);
    }

    #[test]
    fn same_seed_yields_identical_trajectories() {
        let x = dataset::xor_inputs();
        let y = dataset::xor_targets();
        let optimizer = Sgd::new(0.01);

        let mut a = XorNet::seeded(9);
        let mut b = XorNet::seeded(9);
        for _ in 0..200 {
            a.step(&x, &y, &optimizer);
            b.step(&x, &y, &optimizer);
        }

        assert_eq!(a.hidden.weights, b.hidden.weights);
        assert_eq!(a.hidden.biases, b.hidden.biases);
        assert_eq!(a.output.weights, b.output.weights);
        assert_eq!(a.output.biases, b.output.biases);
        assert_eq!(a.loss(&x, &y), b.loss(&x, &y));
    }

    #[test]
    fn loss_agrees_with_mse_of_forward() {
        let x = dataset::xor_inputs();
        let y = dataset::xor_targets();
        let mut net = XorNet::seeded(5);
        let predicted = net.forward(&x);
        assert_eq!(net.loss(&x, &y), MseLoss::loss(&predicted, &y));
    }

    #[test]
    fn step_reports_pre_update_loss() {
        let x = dataset::xor_inputs();
        let y = dataset::xor_targets();
        let mut net = XorNet::seeded(6);
        let before = net.loss(&x, &y);
        let reported = net.step(&x, &y, &Sgd::new(0.01));
        assert_eq!(reported, before);
    }
}
