//! Error types for input parsing and report export.

use std::io;
use std::path::PathBuf;

use crate::models::InputField;

/// Errors raised while turning the three text fields into story inputs.
///
/// Positions are 1-based so they match what the user counts on screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Levels: {token:?} at position {position} is not a whole number")]
    InvalidLevel { position: usize, token: String },

    #[error("{field}: {token:?} at position {position} is not a number")]
    InvalidRatio {
        field: InputField,
        position: usize,
        token: String,
    },

    #[error("list lengths differ: {levels} levels, {seismic} seismic ratios, {wind} wind ratios")]
    LengthMismatch {
        levels: usize,
        seismic: usize,
        wind: usize,
    },
}

/// Errors raised while writing a report to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report to {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}
