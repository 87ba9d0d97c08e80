//! File writing for emitted artifacts.
//!
//! Each artifact is written to a temporary sibling (`<name>.tmp`) and renamed
//! into place, so a reader never sees a half-written bundle. Artifacts are
//! written one at a time; a failure leaves earlier artifacts untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::{Error, Result};

/// Make sure `dir` exists as a directory.
///
/// Only a "not found" metadata result leads to creation. Any other metadata error, or a
/// non-directory at `dir`, is an I/O error.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::io(
            format!("Output path '{}' exists but is not a directory", dir.display()),
            std::io::Error::new(ErrorKind::AlreadyExists, "not a directory"),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory '{}'", dir.display()),
                    e,
                )
            })
        }
        Err(e) => Err(Error::io(
            format!("Failed to access output directory '{}'", dir.display()),
            e,
        )),
    }
}

/// Resolve `file_name` under `base_dir`, rejecting paths that escape it.
pub fn output_path(base_dir: &Path, file_name: &str) -> Result<PathBuf> {
    if file_name.contains('\0') {
        return Err(Error::InvalidConfig(
            "Output file name contains a null byte".to_string(),
        ));
    }

    let base = base_dir.clean();
    let full = base.join(Path::new(file_name).clean()).clean();
    if !full.starts_with(&base) {
        return Err(Error::InvalidConfig(format!(
            "Output file '{}' escapes output directory '{}'",
            file_name,
            base.display()
        )));
    }
    Ok(full)
}

/// Write `content` to `target` through a temporary file and a rename.
pub fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let temp = temp_path(target);

    fs::write(&temp, content).map_err(|e| {
        cleanup(&temp);
        Error::io(
            format!("Failed to write temporary file '{}'", temp.display()),
            e,
        )
    })?;

    fs::rename(&temp, target).map_err(|e| {
        cleanup(&temp);
        Error::io(
            format!(
                "Failed to rename '{}' to '{}'",
                temp.display(),
                target.display()
            ),
            e,
        )
    })
}

/// Copy `src` to `dest` byte for byte, returning the number of bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    fs::copy(src, dest).map_err(|e| {
        Error::io(
            format!("Failed to copy '{}' to '{}'", src.display(), dest.display()),
            e,
        )
    })
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Best effort; we are already failing.
fn cleanup(temp: &Path) {
    if temp.exists() {
        if let Err(e) = fs::remove_file(temp) {
            tracing::warn!("Failed to clean up temporary file '{}': {}", temp.display(), e);
        }
    }
}
