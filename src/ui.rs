//! Terminal colors and icons shared by the CLI output.

use colored::{ColoredString, Colorize};

use crate::report::{ChartStatus, Severity};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("CHARTLINT_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for an issue severity.
///
/// Icons:
/// - Info: ℹ (blue)
/// - Warning: ⚠ (yellow)
/// - Error: ✗ (red)
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Info => "ℹ".blue(),
        Severity::Warning => "⚠".yellow(),
        Severity::Error => "✗".red(),
    }
}

/// Returns a colored icon for a chart's lint outcome.
pub fn status_icon(status: ChartStatus) -> ColoredString {
    match status {
        ChartStatus::Passed => "✓".green(),
        ChartStatus::Warned => "⚠".yellow(),
        ChartStatus::Failed => "✗".red(),
    }
}
