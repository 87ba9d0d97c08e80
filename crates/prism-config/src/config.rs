//! The resolved project configuration handed to the pipeline.

use std::path::{Path, PathBuf};

use crate::manifest::PackageManifest;
use crate::settings::BuildSettings;

/// Everything known about a project, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project root; relative settings paths resolve against it.
    pub root: PathBuf,
    pub manifest: PackageManifest,
    pub settings: BuildSettings,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>, manifest: PackageManifest, settings: BuildSettings) -> Self {
        Self {
            root: root.into(),
            manifest,
            settings,
        }
    }

    /// Resolve a settings path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn entry_path(&self) -> PathBuf {
        self.resolve(&self.settings.entry)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.resolve(&self.settings.out_dir)
    }

    pub fn stylesheet_path(&self) -> Option<PathBuf> {
        self.settings.stylesheet.as_deref().map(|p| self.resolve(p))
    }

    /// UMD global name for this package.
    pub fn global_name(&self) -> String {
        self.settings.resolved_global_name(&self.manifest.name)
    }
}
