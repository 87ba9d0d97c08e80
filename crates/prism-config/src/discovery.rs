//! Layered configuration discovery.
//!
//! Build settings are merged from, lowest priority first:
//!
//! 1. Built-in defaults ([`BuildSettings::default`])
//! 2. `prism.toml` in the project root
//! 3. The `prism` field of `package.json`
//! 4. `PRISM_*` environment variables (`PRISM_OUT_DIR=lib`, `PRISM_GLOBAL_NAME=Modal`)

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::Uncased;
use figment::Figment;
use serde_json::Value;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::manifest::{PackageManifest, MANIFEST_FILE_NAME};
use crate::settings::BuildSettings;
use crate::validation::{validate_global_name, validate_settings};

/// Optional settings file in the project root.
pub const CONFIG_FILE_NAME: &str = "prism.toml";

/// `package.json` field holding settings.
pub const PACKAGE_FIELD: &str = "prism";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PRISM_";

/// File-based configuration discovery rooted at a project directory.
///
/// # Example
///
/// ```no_run
/// use prism_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// println!("building {} v{}", config.manifest.name, config.manifest.version);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `prism.toml`, if present.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Build the merged figment without extracting it.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(BuildSettings::default()));

        if let Some(path) = self.find() {
            tracing::debug!("Merging settings from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(value) = self.package_field()? {
            tracing::debug!("Merging settings from package.json '{}' field", PACKAGE_FIELD);
            figment = figment.merge(Serialized::defaults(value));
        }

        let env = Env::prefixed(ENV_PREFIX)
            .map(|key| Uncased::new(snake_to_camel(key.as_str())))
            .lowercase(false);

        Ok(figment.merge(env))
    }

    /// Load merged and validated build settings.
    pub fn load_settings(&self) -> Result<BuildSettings> {
        let settings: BuildSettings = self.figment()?.extract()?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Load the manifest and settings into a [`ProjectConfig`].
    pub fn load(&self) -> Result<ProjectConfig> {
        let manifest = PackageManifest::load(&self.root)?;
        let settings = self.load_settings()?;
        let config = ProjectConfig::new(self.root.clone(), manifest, settings);
        validate_global_name(&config.global_name())?;
        Ok(config)
    }

    fn package_field(&self) -> Result<Option<Value>> {
        let path = self.root.join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
                path: path.clone(),
                message: e.to_string(),
            })?;

        match parsed.get(PACKAGE_FIELD) {
            None | Some(Value::Null) => Ok(None),
            Some(value @ Value::Object(_)) => Ok(Some(value.clone())),
            Some(_) => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                message: "the 'prism' field of package.json must be an object".to_string(),
            }),
        }
    }
}

/// Discover and load configuration from the current directory.
pub fn discover() -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}

/// `OUT_DIR` -> `outDir`
fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
