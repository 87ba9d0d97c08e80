//! Status message functions for terminal output.
//!
//! Status lines go to stderr. Artifact lines are the build report and go to
//! stdout.

use std::path::Path;

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr.
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print the `<path> <size>` report line for a written file.
pub fn artifact(path: &Path, size: &str) {
    println!("{}", artifact_line(path, size, colors_enabled()));
}

fn artifact_line(path: &Path, size: &str, color: bool) -> String {
    let path = path.display().to_string();
    if color {
        format!("{} {}", path.green(), size)
    } else {
        format!("{} {}", path, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        success("Success message");
        info("Info message");
    }

    #[test]
    fn test_artifact_line_plain() {
        assert_eq!(
            artifact_line(Path::new("dist/modal.js"), "1.23kb", false),
            "dist/modal.js 1.23kb"
        );
    }

    #[test]
    fn test_artifact_line_colored_keeps_text() {
        let line = artifact_line(Path::new("dist/modal.js"), "1.23kb", true);
        assert!(line.contains("dist/modal.js"));
        assert!(line.ends_with(" 1.23kb"));
        assert!(line.contains("\u{1b}["));
    }
}
