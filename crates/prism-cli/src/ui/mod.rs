//! Terminal output: status messages, artifact lines and the build summary.
//!
//! Colors are decided once by [`init_colors`] from `--no-color`, `NO_COLOR`,
//! `FORCE_COLOR` and terminal detection.
//!
//! ```no_run
//! use prism_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Build successful");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{artifact, info, success};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// NO_COLOR wins over FORCE_COLOR; otherwise colors follow whether stderr is
/// attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide color support for the rest of the process.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
