// ABOUTME: Application-wide error types for simple-lxd.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runner::RunError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidEnv { name: String, reason: String },

    #[error("at least one container is required")]
    NoTargets,

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
