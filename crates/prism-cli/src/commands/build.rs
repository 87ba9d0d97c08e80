//! Build command implementation.
//!
//! `prism build` (or plain `prism`) runs the emission pipeline with the
//! Rolldown backend and reports one line per written file.

use std::path::Path;

use prism_bundler::{EmissionPipeline, EmissionSummary, RolldownBundler, format_kib};

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load `package.json` and the merged build settings
/// 2. Apply command-line overrides
/// 3. Emit every profile, printing `<path> <size>kb` as each file lands
/// 4. Print the build summary
///
/// With `quiet`, nothing but errors is printed.
///
/// # Errors
///
/// Configuration errors, and the first build, render or I/O error of the run.
pub async fn execute(args: BuildArgs, cwd: &Path, quiet: bool) -> Result<()> {
    let mut config = utils::load_config(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.settings.out_dir = utils::resolve_path(&out_dir, cwd);
    }

    if !quiet {
        ui::info(&format!(
            "Building {} v{}",
            config.manifest.name, config.manifest.version
        ));
    }
    tracing::debug!(
        entry = %config.entry_path().display(),
        out_dir = %config.out_dir().display(),
        "Resolved configuration"
    );

    let pipeline = EmissionPipeline::new(config, RolldownBundler::new());
    let summary = pipeline
        .run_with(|artifact| {
            if !quiet {
                ui::artifact(&artifact.path, &artifact.size_kib());
            }
        })
        .await?;

    if !quiet {
        if let Some(css) = &summary.stylesheet {
            ui::artifact(&css.path, &format_kib(css.bytes));
        }
        print_summary(&summary);
        ui::success(&format!(
            "Build completed in {}",
            ui::format_duration(summary.duration)
        ));
    }

    Ok(())
}

fn print_summary(summary: &EmissionSummary) {
    let entries: Vec<_> = summary
        .artifacts
        .iter()
        .map(|a| {
            let name = a
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| a.path.display().to_string());
            (format!("{name} [{}]", a.format), a.bytes as u64, a.duration)
        })
        .collect();
    ui::print_build_summary(&entries, summary.duration);
}
