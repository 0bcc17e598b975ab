//! Utility functions for common operations.

use std::path::{Path, PathBuf};

/// File name offered in the export prompt
pub const DEFAULT_EXPORT_FILE: &str = "drift_report.txt";

/// Extension added when the chosen export path has none
pub const DEFAULT_EXPORT_EXTENSION: &str = "txt";

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Add the default extension if the path has none
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXPORT_EXTENSION)
    }
}

/// Turn the text typed into the export prompt into a destination path.
///
/// Returns `None` for blank input.
pub fn resolve_export_path(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(with_default_extension(&expand_home(input)))
}

/// Format a ratio for the table, keeping a decimal point on whole numbers
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_finite() && ratio.fract() == 0.0 {
        format!("{:.1}", ratio)
    } else {
        format!("{}", ratio)
    }
}
