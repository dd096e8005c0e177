//! Error types for loading conversations and configuration.
//!
//! Segment operations never fail; only the file-facing edges do.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConverseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid conversation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type ConverseResult<T> = Result<T, ConverseError>;
