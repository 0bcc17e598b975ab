//! Drift ratio evaluation against the fixed seismic and wind limits.

use serde::Serialize;

use super::{DriftCategory, DriftStatus, StoryInput};

/// Pass/fail outcome for one story
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub id: i64,
    pub seismic_ratio: f64,
    pub seismic_status: DriftStatus,
    pub wind_ratio: f64,
    pub wind_status: DriftStatus,
}

impl EvaluationResult {
    pub fn from_input(input: &StoryInput) -> Self {
        Self {
            id: input.id,
            seismic_ratio: input.seismic_ratio,
            seismic_status: DriftCategory::Seismic.classify(input.seismic_ratio),
            wind_ratio: input.wind_ratio,
            wind_status: DriftCategory::Wind.classify(input.wind_ratio),
        }
    }

    /// Status for the given load case
    pub fn status(&self, category: DriftCategory) -> DriftStatus {
        match category {
            DriftCategory::Seismic => self.seismic_status,
            DriftCategory::Wind => self.wind_status,
        }
    }

    /// True if either ratio is over its limit
    pub fn has_exceedance(&self) -> bool {
        self.seismic_status.exceeds() || self.wind_status.exceeds()
    }
}

/// Evaluate every story, preserving input order
pub fn evaluate(inputs: &[StoryInput]) -> Vec<EvaluationResult> {
    inputs.iter().map(EvaluationResult::from_input).collect()
}

/// Number of stories with at least one ratio over its limit
pub fn exceedance_count(results: &[EvaluationResult]) -> usize {
    results.iter().filter(|r| r.has_exceedance()).count()
}
