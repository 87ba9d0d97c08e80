//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use prism_config::{ConfigDiscovery, ProjectConfig};

use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Project directory from `--cwd`, or the process working directory.
pub fn resolve_cwd(explicit: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let Some(dir) = explicit else {
        return Ok(current);
    };

    let dir = resolve_path(dir, &current);
    let meta = std::fs::metadata(&dir).with_path(&dir)?;
    if !meta.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--cwd is not a directory: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

/// Load manifest and settings for the project at `cwd`.
pub fn load_config(cwd: &Path) -> Result<ProjectConfig> {
    let discovery = ConfigDiscovery::new(cwd);
    if let Some(path) = discovery.find() {
        tracing::debug!("Found {}", path.display());
    }
    Ok(discovery.load()?)
}
