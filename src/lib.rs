pub mod math;
pub mod activation;
pub mod dataset;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::Activation;
pub use layers::dense::Dense;
pub use network::xor_net::XorNet;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::checkpoint::Checkpoint;
pub use train::reporter::Reporter;
pub use train::train_config::TrainConfig;
pub use train::trainer::{Trainer, TrainingSummary};
