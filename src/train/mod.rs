pub mod checkpoint;
pub mod reporter;
pub mod train_config;
pub mod trainer;

pub use checkpoint::Checkpoint;
pub use reporter::Reporter;
pub use train_config::TrainConfig;
pub use trainer::{Trainer, TrainingSummary};
