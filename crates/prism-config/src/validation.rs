//! Schema-level validation of build settings.
//!
//! No filesystem checks happen here: a missing entry module is the bundler's
//! to report, with its own diagnostic.

use crate::error::{ConfigError, Result};
use crate::settings::BuildSettings;

/// Validate settings after all configuration sources are merged.
pub fn validate_settings(settings: &BuildSettings) -> Result<()> {
    if settings.entry.as_os_str().is_empty() {
        return Err(invalid("entry", "entry module path cannot be empty"));
    }

    if settings.out_dir.as_os_str().is_empty() {
        return Err(invalid("outDir", "output directory cannot be empty"));
    }

    if settings.external.iter().any(|id| id.trim().is_empty()) {
        return Err(invalid("external", "external module ids cannot be empty"));
    }

    for (module, global) in &settings.globals {
        if !is_identifier_path(global) {
            return Err(invalid(
                "globals",
                &format!("'{global}' (for '{module}') is not a valid global binding"),
            ));
        }
    }

    if let Some(name) = &settings.global_name {
        validate_global_name(name)?;
    }

    if settings.env_marker.trim().is_empty() {
        return Err(invalid("envMarker", "environment marker cannot be empty"));
    }

    Ok(())
}

/// Check the UMD global name, whether configured or derived from the package name.
pub fn validate_global_name(name: &str) -> Result<()> {
    if is_identifier_path(name) {
        Ok(())
    } else {
        Err(invalid(
            "globalName",
            &format!("'{name}' is not a valid JavaScript identifier"),
        ))
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Accepts `Vue` as well as dotted paths such as `window.Vue`.
fn is_identifier_path(value: &str) -> bool {
    !value.is_empty() && value.split('.').all(is_identifier)
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
