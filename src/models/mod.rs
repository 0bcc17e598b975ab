//! Data models for the drift ratio checker
//!
//! This module contains the core data structures:
//! - Story inputs parsed from the three comma-separated fields
//! - Evaluation results and the fixed drift limits
//! - Enums for classification and UI state

pub mod enums;
pub mod evaluation;
pub mod story;

/// Allowable seismic drift ratio
pub const SEISMIC_DRIFT_LIMIT: f64 = 0.01;

/// Allowable wind drift ratio
pub const WIND_DRIFT_LIMIT: f64 = 0.02;

// Re-exports for convenient access
pub use enums::{DriftCategory, DriftStatus, InputField, LengthPolicy, Mode, StatusLevel};
pub use evaluation::{evaluate, exceedance_count, EvaluationResult};
pub use story::{parse_inputs_with_policy, ColumnLengths, StoryInput};
