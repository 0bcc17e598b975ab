//! Report formatting and export.
//!
//! Turns evaluation results into the plain-text report shown on screen and
//! writes that exact text to disk when the user exports it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::ExportError;
use crate::models::{DriftCategory, DriftStatus, EvaluationResult};

/// Shown in place of the report when any field fails to parse.
pub const INVALID_INPUT_MESSAGE: &str =
    "Error: Invalid input. Please enter valid levels and drift ratios.";

/// One bullet line of the report for a single load case
fn status_line(category: DriftCategory, status: DriftStatus) -> String {
    match status {
        DriftStatus::Exceeds => format!(
            "  - {} drift ratio exceeds the value recommended by Eurocode.",
            category.label()
        ),
        DriftStatus::Ok => format!(
            "  - {} drift ratio is within the allowable limit.",
            category.label()
        ),
    }
}

/// Build the full report text.
///
/// Each level gets a heading, one line per load case and a blank separator
/// line. No results gives an empty string.
pub fn format_report(results: &[EvaluationResult]) -> String {
    let mut report = String::new();
    for result in results {
        report.push_str(&format!("Level {}:\n", result.id));
        for category in [DriftCategory::Seismic, DriftCategory::Wind] {
            report.push_str(&status_line(category, result.status(category)));
            report.push('\n');
        }
        report.push('\n');
    }
    report
}

/// Write the report verbatim to `destination`, replacing any existing file.
///
/// The file handle is dropped on every path out of this function; the data
/// is synced before success is reported.
pub fn export_report(report: &str, destination: &Path) -> Result<(), ExportError> {
    write_file(report, destination).map_err(|source| {
        tracing::error!(path = %destination.display(), error = %source, "report export failed");
        ExportError::Io {
            path: destination.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        path = %destination.display(),
        bytes = report.len(),
        "report exported"
    );
    Ok(())
}

fn write_file(contents: &str, destination: &Path) -> io::Result<()> {
    let mut file = File::create(destination)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

/// Results as a pretty-printed JSON array
pub fn results_to_json(results: &[EvaluationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
