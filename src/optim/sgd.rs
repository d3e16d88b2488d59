use crate::{layers::dense::Dense, math::matrix::Matrix};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent update to a layer.
    pub fn step(&self, layer: &mut Dense, weight_grad: &Matrix, bias_grad: &Matrix) {
        layer.apply_gradients(weight_grad, bias_grad, self.learning_rate);
    }
}
