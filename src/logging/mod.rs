pub mod run_log;

pub use run_log::{write_run_log, RunInfo};
