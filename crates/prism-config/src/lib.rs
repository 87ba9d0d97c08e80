//! Configuration for the prism emitter.
//!
//! Everything the emission pipeline needs to know about a project is gathered
//! here once, at startup, and handed around as an explicit [`ProjectConfig`]:
//!
//! - [`PackageManifest`] - name, version, homepage and author from `package.json`
//! - [`BuildSettings`] - entry module, output directory, externals and UMD bindings
//! - [`ConfigDiscovery`] - layered loading (defaults, `prism.toml`, `package.json`, env)

pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod settings;
pub mod validation;

pub use config::ProjectConfig;
pub use discovery::{discover, ConfigDiscovery, CONFIG_FILE_NAME, ENV_PREFIX, PACKAGE_FIELD};
pub use error::{ConfigError, Result};
pub use manifest::{Author, PackageManifest};
pub use settings::{BuildSettings, EsTarget, Platform, DEFAULT_ENV_MARKER};
pub use validation::{validate_global_name, validate_settings};
