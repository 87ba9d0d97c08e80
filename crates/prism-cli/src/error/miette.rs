//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use prism_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // The bundler error carries its own code and help text
        CliError::Emit(e) => Report::new(e),
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    let help = match &err {
        ConfigError::ManifestNotFound(_) => {
            "Run prism from a package directory, or pass --cwd <DIR>."
        }
        ConfigError::MissingField(_) => {
            "package.json needs name, version, homepage and author for the license banner."
        }
        ConfigError::InvalidValue { .. } => {
            "Check the 'prism' field of package.json, prism.toml and PRISM_* variables."
        }
        _ => "Check package.json and prism.toml.",
    };

    miette::miette!(
        code = "INVALID_CONFIG",
        help = help,
        "Configuration error: {}",
        err
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;
    use std::path::PathBuf;

    #[test]
    fn bundler_errors_keep_their_code() {
        let report = cli_error_to_miette(CliError::Emit(prism_bundler::Error::Render(
            "boom".to_string(),
        )));
        assert_eq!(report.code().unwrap().to_string(), "RENDER_ERROR");
    }

    #[test]
    fn config_errors_get_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::ManifestNotFound(
            PathBuf::from("package.json"),
        )));
        assert_eq!(report.code().unwrap().to_string(), "INVALID_CONFIG");
        assert!(report.help().unwrap().to_string().contains("--cwd"));
        assert!(report.to_string().contains("package.json"));
    }
}
