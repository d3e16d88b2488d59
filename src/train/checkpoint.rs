use crate::math::matrix::Matrix;

/// Read-only snapshot taken at a reporting iteration.
///
/// Holds clones of every parameter matrix plus the predictions and loss they
/// produce, so observers can keep it after training has moved on.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    /// Iteration index the snapshot was taken at (after that update).
    pub iteration: usize,
    /// Output column, one prediction per dataset row.
    pub predictions: Vec<f64>,
    pub hidden_weights: Matrix,
    pub hidden_biases: Matrix,
    pub output_weights: Matrix,
    pub output_biases: Matrix,
    pub loss: f64,
}
