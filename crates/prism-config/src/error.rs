//! Error types for manifest and settings loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("package manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("invalid package manifest {}: {message}", .path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("package manifest is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("failed to merge configuration sources: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}
