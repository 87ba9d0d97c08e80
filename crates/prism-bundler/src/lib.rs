//! # prism-bundler
//!
//! Emits one entry module as several distribution artifacts - CommonJS,
//! ES module, UMD development and minified UMD production - each stamped with
//! the same license banner.
//!
//! ## Quick Start
//!
//! ```no_run
//! use prism_bundler::{EmissionPipeline, RolldownBundler};
//! use prism_config::ConfigDiscovery;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigDiscovery::new(".").load()?;
//! let pipeline = EmissionPipeline::new(config, RolldownBundler::new());
//!
//! let summary = pipeline
//!     .run_with(|artifact| println!("{} {}", artifact.path.display(), artifact.size_kib()))
//!     .await?;
//! assert_eq!(summary.artifacts.len(), 4);
//! # Ok(()) }
//! ```
//!
//! The [`Bundler`] trait is the only seam to the underlying compiler:
//! [`RolldownBundler`] is the production implementation, tests drive the
//! pipeline with in-memory doubles.

pub mod backend;
pub mod banner;
pub mod diagnostics;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod profile;

pub use backend::{Bundler, RolldownBundle, RolldownBundler};
pub use banner::Banner;
pub use pipeline::{CopiedStylesheet, EmissionPipeline, EmissionSummary, EmittedArtifact, format_kib};
pub use plan::{BuildPlan, ExportStyle, ModuleFormat, RenderOptions, TransformPlugin, TransformSettings};
pub use profile::{OutputProfile, ProfileFormat, ProfileRegistry, UmdBindings};

/// Error types for emission.
///
/// Every variant is terminal for a run: the pipeline stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry module or one of its dependencies could not be resolved or parsed.
    #[error("Build failed: {0}")]
    Build(String),

    /// Output generation failed (e.g. a UMD external without a global binding).
    #[error("Render failed: {0}")]
    Render(String),

    /// Directory creation, file copy or file write failed.
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for prism-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// I/O error with a context message.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source,
        }
    }

    pub fn is_build(&self) -> bool {
        matches!(self, Error::Build(_))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Error::Render(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}

impl From<prism_config::ConfigError> for Error {
    fn from(err: prism_config::ConfigError) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Build(_) => "BUILD_ERROR",
            Error::Render(_) => "RENDER_ERROR",
            Error::Io { .. } => "IO_ERROR",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Build(_) => Some(Box::new(
                "Check the 'entry' setting and that every import resolves or is listed in 'external'.",
            )),
            Error::Render(msg) if msg.contains("global") => Some(Box::new(
                "Add a 'globals' entry for every external module used by the UMD bundles.",
            )),
            Error::Io { .. } => Some(Box::new(
                "Check output directory permissions and free disk space. Artifacts written before the failure are left in place.",
            )),
            Error::InvalidConfig(msg) => Some(Box::new(format!(
                "Check package.json and prism.toml.\nError: {}",
                msg
            ))),
            _ => None,
        }
    }
}
