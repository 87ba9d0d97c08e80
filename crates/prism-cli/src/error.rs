//! Error handling for the prism CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`; the `main`
//! boundary turns a `CliError` into a [`miette::Report`] for display.
//!
//! # Example
//!
//! ```rust,no_run
//! use prism_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_entry(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest or build settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] prism_config::ConfigError),

    /// Build, render or write failure from the emission pipeline
    #[error(transparent)]
    Emit(#[from] prism_bundler::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for attaching a path to I/O failures.
pub trait ResultExt<T> {
    /// Turn a "not found" I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_config::ConfigError;

    #[test]
    fn test_cli_error_from_config_error() {
        let err: CliError = ConfigError::ManifestNotFound(PathBuf::from("package.json")).into();
        assert!(matches!(err, CliError::Config(_)));
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_cli_error_from_bundler_error() {
        let err: CliError = prism_bundler::Error::Build("entry missing".to_string()).into();
        assert!(matches!(err, CliError::Emit(_)));
        assert_eq!(err.to_string(), "Build failed: entry missing");
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/package.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/dist").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
