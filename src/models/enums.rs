//! Enums used throughout the drift ratio checker
//!
//! This module contains the enum types used for classification, form
//! navigation and UI state.

use std::fmt;

use serde::Serialize;

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Form,   // Default mode - editing the three input fields
    Export, // Export prompt open - editing the destination path
}

/// One of the three free-text inputs on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Levels,
    Seismic,
    Wind,
}

impl InputField {
    pub const ALL: [InputField; 3] = [InputField::Levels, InputField::Seismic, InputField::Wind];

    pub fn next(&self) -> Self {
        match self {
            InputField::Levels => InputField::Seismic,
            InputField::Seismic => InputField::Wind,
            InputField::Wind => InputField::Levels,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            InputField::Levels => InputField::Wind,
            InputField::Seismic => InputField::Levels,
            InputField::Wind => InputField::Seismic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Levels => "Levels",
            InputField::Seismic => "Seismic Drift Ratios",
            InputField::Wind => "Wind Drift Ratios",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Load case a drift ratio is checked under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftCategory {
    Seismic,
    Wind,
}

impl DriftCategory {
    /// Allowable drift ratio for this load case
    pub fn limit(&self) -> f64 {
        match self {
            DriftCategory::Seismic => super::SEISMIC_DRIFT_LIMIT,
            DriftCategory::Wind => super::WIND_DRIFT_LIMIT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriftCategory::Seismic => "Seismic",
            DriftCategory::Wind => "Wind",
        }
    }

    /// Strictly greater than the limit exceeds; equal to it is still OK.
    pub fn classify(&self, ratio: f64) -> DriftStatus {
        if ratio > self.limit() {
            DriftStatus::Exceeds
        } else {
            DriftStatus::Ok
        }
    }
}

/// Outcome of comparing one drift ratio with its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriftStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "EXCEEDS")]
    Exceeds,
}

impl DriftStatus {
    pub fn exceeds(&self) -> bool {
        matches!(self, DriftStatus::Exceeds)
    }
}

/// What to do when the three lists have different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    #[default]
    Truncate, // Pair positionally, stop at the shortest list
    Strict,   // Reject with a length mismatch error
}

/// Severity of the message shown in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}
