//! Formatting utilities for sizes, durations, and the build summary.

use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// ```
/// use prism_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format (`50ms`, `1.50s`, `1m 30s`).
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print a table of `(name, size_bytes, duration)` rows to stderr.
///
/// `total` is the wall time of the whole run, stylesheet copy included.
pub fn print_build_summary(entries: &[(String, u64, Duration)], total: Duration) {
    let width = Term::stderr().size().1 as usize;
    let rule = "─".repeat(width.clamp(20, 80));
    let total_size: u64 = entries.iter().map(|(_, s, _)| s).sum();

    if !colors_enabled() {
        eprintln!("\nBuild Summary\n{rule}");
        for (name, size, duration) in entries {
            eprintln!(
                "  ▸ {} {} ({})",
                name,
                format_size(*size),
                format_duration(*duration)
            );
        }
        eprintln!("{rule}");
        eprintln!(
            "  Total: {} in {}",
            format_size(total_size),
            format_duration(total)
        );
        return;
    }

    eprintln!("\n{}", "Build Summary".bold().underline());
    eprintln!("{rule}");

    for (name, size, duration) in entries {
        eprintln!(
            "  {} {} {} {}",
            "▸".blue(),
            name.bright_white().bold(),
            format_size(*size).dimmed(),
            format!("({})", format_duration(*duration)).dimmed()
        );
    }

    eprintln!("{rule}");
    eprintln!(
        "  {} {} in {}",
        "Total:".bold(),
        format_size(total_size).green(),
        format_duration(total).green()
    );
}
