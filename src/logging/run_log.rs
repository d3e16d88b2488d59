use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::activation::activation::Activation;

/// Everything an external viewer needs to identify a run. Written once at
/// startup; the trainer never reads it back.
#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    pub name: String,
    pub input_features: usize,
    pub hidden_units: usize,
    pub output_units: usize,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    pub learning_rate: f64,
    pub iterations: usize,
}

/// Serializes `info` to `<dir>/run.json`, creating the directory first.
/// Returns the path of the written file.
pub fn write_run_log(dir: &Path, info: &RunInfo) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("run.json");
    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, info)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(path)
}
