//! Prism CLI - command-line front end for the prism emitter.
//!
//! Running `prism` in a package directory reads `package.json`, merges the
//! build settings, and writes the CommonJS, ES module, UMD and minified UMD
//! bundles plus the stylesheet into the output directory.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `build` and `profiles` implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines and the build summary
//!
//! # Example
//!
//! ```rust
//! use prism_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
