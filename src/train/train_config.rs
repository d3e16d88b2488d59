/// The XOR run is fully determined at compile time; these are its constants.
pub const ITERATIONS: usize = 100_001;
pub const REPORT_EVERY: usize = 10_000;
pub const LEARNING_RATE: f64 = 0.01;

/// Hyperparameters for a training run.
///
/// # Fields
/// - `iterations`    — total number of full-batch updates
/// - `report_every`  — snapshot period; a checkpoint is taken whenever
///                     `iteration % report_every == 0`
/// - `learning_rate` — step size for every parameter update
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub iterations: usize,
    pub report_every: usize,
    pub learning_rate: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: ITERATIONS,
            report_every: REPORT_EVERY,
            learning_rate: LEARNING_RATE,
        }
    }
}
