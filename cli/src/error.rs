use std::path::PathBuf;

use warpmaze_lab::LabError;

/// Failures surfaced by the command-line driver.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Lab(#[from] LabError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Fatal in single-run mode only; sampling records it instead.
    #[error("no solution was found for the maze after {steps} search steps")]
    NoSolution { steps: usize },
}
