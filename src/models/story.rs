//! Story inputs parsed from the form's comma-separated fields.

use std::borrow::Cow;
use std::fmt;

use crate::errors::ParseError;

use super::{InputField, LengthPolicy};

/// One story's identifier paired with its two drift ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryInput {
    pub id: i64,
    pub seismic_ratio: f64,
    pub wind_ratio: f64,
}

/// Split a field on commas and trim each token, keeping 1-based positions
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(',').map(str::trim).enumerate().map(|(i, t)| (i + 1, t))
}

/// Drop `_` digit separators ("1_000", "0.0_1").
///
/// Each underscore must sit between two ASCII digits; anything else makes
/// the token invalid.
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }
    let bytes = token.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !before.is_some_and(|c| c.is_ascii_digit()) || !after.is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    Some(Cow::Owned(token.replace('_', "")))
}

fn parse_levels(text: &str) -> Result<Vec<i64>, ParseError> {
    tokens(text)
        .map(|(position, token)| {
            strip_digit_separators(token)
                .and_then(|t| t.parse::<i64>().ok())
                .ok_or_else(|| ParseError::InvalidLevel {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_ratios(field: InputField, text: &str) -> Result<Vec<f64>, ParseError> {
    tokens(text)
        .map(|(position, token)| {
            strip_digit_separators(token)
                .and_then(|t| t.parse::<f64>().ok())
                .ok_or_else(|| ParseError::InvalidRatio {
                field,
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Token counts of the three fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLengths {
    pub levels: usize,
    pub seismic: usize,
    pub wind: usize,
}

impl ColumnLengths {
    pub fn is_uneven(&self) -> bool {
        self.levels != self.seismic || self.seismic != self.wind
    }

    /// Entries past the shortest list, which are left unpaired
    pub fn dropped(&self) -> usize {
        let shortest = self.levels.min(self.seismic).min(self.wind);
        self.levels + self.seismic + self.wind - 3 * shortest
    }

    fn mismatch_error(&self) -> ParseError {
        ParseError::LengthMismatch {
            levels: self.levels,
            seismic: self.seismic,
            wind: self.wind,
        }
    }
}

impl fmt::Display for ColumnLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} levels, {} seismic, {} wind ratios",
            self.levels, self.seismic, self.wind
        )
    }
}

/// Paired stories plus the field lengths they were paired from
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInputs {
    pub stories: Vec<StoryInput>,
    pub lengths: ColumnLengths,
}

/// The three fields parsed but not yet paired
struct Columns {
    levels: Vec<i64>,
    seismic: Vec<f64>,
    wind: Vec<f64>,
}

impl Columns {
    /// Fields are parsed in order (levels, seismic, wind); the first bad
    /// token wins.
    fn parse(levels_text: &str, seismic_text: &str, wind_text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            levels: parse_levels(levels_text)?,
            seismic: parse_ratios(InputField::Seismic, seismic_text)?,
            wind: parse_ratios(InputField::Wind, wind_text)?,
        })
    }

    fn lengths(&self) -> ColumnLengths {
        ColumnLengths {
            levels: self.levels.len(),
            seismic: self.seismic.len(),
            wind: self.wind.len(),
        }
    }

    /// Zip the columns, stopping at the shortest
    fn pair(self) -> Vec<StoryInput> {
        self.levels
            .into_iter()
            .zip(self.seismic)
            .zip(self.wind)
            .map(|((id, seismic_ratio), wind_ratio)| StoryInput {
                id,
                seismic_ratio,
                wind_ratio,
            })
            .collect()
    }
}

/// Parse the three fields and pair them positionally.
///
/// Pairing stops at the shortest list; `lengths` records how many tokens
/// each field held so the caller can tell the user what was dropped.
pub fn parse_inputs(
    levels_text: &str,
    seismic_text: &str,
    wind_text: &str,
) -> Result<ParsedInputs, ParseError> {
    let columns = Columns::parse(levels_text, seismic_text, wind_text)?;
    let lengths = columns.lengths();
    Ok(ParsedInputs {
        stories: columns.pair(),
        lengths,
    })
}

/// Parse with the given length policy.
///
/// [`LengthPolicy::Strict`] turns uneven lists into
/// [`ParseError::LengthMismatch`]; token errors are still reported first.
pub fn parse_inputs_with_policy(
    levels_text: &str,
    seismic_text: &str,
    wind_text: &str,
    policy: LengthPolicy,
) -> Result<ParsedInputs, ParseError> {
    let parsed = parse_inputs(levels_text, seismic_text, wind_text)?;
    let lengths = parsed.lengths;
    if lengths.is_uneven() {
        match policy {
            LengthPolicy::Strict => return Err(lengths.mismatch_error()),
            LengthPolicy::Truncate => tracing::warn!(
                levels = lengths.levels,
                seismic = lengths.seismic,
                wind = lengths.wind,
                dropped = lengths.dropped(),
                "input lists differ in length, extra entries dropped"
            ),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stories(levels: &str, seismic: &str, wind: &str) -> Vec<StoryInput> {
        parse_inputs(levels, seismic, wind).unwrap().stories
    }

    fn strict(levels: &str, seismic: &str, wind: &str) -> Result<ParsedInputs, ParseError> {
        parse_inputs_with_policy(levels, seismic, wind, LengthPolicy::Strict)
    }

    #[test]
    fn test_parse_inputs_trims_whitespace() {
        let inputs = stories(" 1 , 2", "0.012 ,0.008", "0.015,  0.025 ");
        assert_eq!(
            inputs,
            vec![
                StoryInput { id: 1, seismic_ratio: 0.012, wind_ratio: 0.015 },
                StoryInput { id: 2, seismic_ratio: 0.008, wind_ratio: 0.025 },
            ]
        );
    }

    #[test]
    fn test_parse_inputs_non_numeric_ratio() {
        let err = parse_inputs("1", "abc", "0.01").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRatio {
                field: InputField::Seismic,
                position: 1,
                token: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_inputs_fractional_level_rejected() {
        let err = parse_inputs("1,2.5", "0.01,0.01", "0.01,0.01").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLevel {
                position: 2,
                token: "2.5".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_inputs_empty_token_rejected() {
        let err = parse_inputs("1,,3", "0.01,0.01,0.01", "0.01,0.01,0.01").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLevel { position: 2, .. }));
    }

    #[test]
    fn test_parse_inputs_empty_field_rejected() {
        let err = parse_inputs("1", "0.01", "").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidRatio { field: InputField::Wind, position: 1, .. }
        ));
    }

    #[test]
    fn test_parse_inputs_levels_checked_first() {
        // Both levels and wind are bad; levels are parsed first
        let err = parse_inputs("x", "0.01", "y").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLevel { .. }));
    }

    #[test]
    fn test_parse_inputs_accepts_exponent_and_sign() {
        let inputs = stories("-1,+2", "1e-3,0.5E-2", "2e-2,-0.0");
        assert_eq!(inputs[0].id, -1);
        assert_eq!(inputs[1].id, 2);
        assert_eq!(inputs[0].seismic_ratio, 0.001);
        assert_eq!(inputs[1].seismic_ratio, 0.005);
    }

    #[test]
    fn test_parse_inputs_truncates_to_shortest() {
        let inputs = stories("1,2,3", "0.01,0.02", "0.02,0.03");
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].id, 2);
    }

    #[test]
    fn test_parse_inputs_strict_rejects_mismatch() {
        let err = strict("1,2,3", "0.01,0.02", "0.02,0.03").unwrap_err();
        assert_eq!(
            err,
            ParseError::LengthMismatch {
                levels: 3,
                seismic: 2,
                wind: 2,
            }
        );
    }

    #[test]
    fn test_parse_inputs_strict_accepts_equal_lengths() {
        let parsed = strict("1,2", "0.01,0.02", "0.02,0.03").unwrap();
        assert_eq!(parsed.stories.len(), 2);
    }

    #[test]
    fn test_parse_errors_take_priority_over_length_mismatch() {
        let err = parse_inputs_with_policy("1,2,3", "0.01,oops", "0.02", LengthPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidRatio { position: 2, .. }));
    }

    #[test]
    fn test_parse_inputs_with_policy_reports_lengths() {
        let parsed =
            parse_inputs_with_policy("1,2,3", "0.01,0.02", "0.02,0.03", LengthPolicy::Truncate)
                .unwrap();
        assert_eq!(parsed.stories.len(), 2);
        assert!(parsed.lengths.is_uneven());
        assert_eq!(parsed.lengths.dropped(), 1);
        assert_eq!(parsed.lengths.to_string(), "3 levels, 2 seismic, 2 wind ratios");
    }

    #[test]
    fn test_even_lengths_drop_nothing() {
        let parsed =
            parse_inputs_with_policy("1,2", "0.01,0.02", "0.02,0.03", LengthPolicy::Truncate)
                .unwrap();
        assert!(!parsed.lengths.is_uneven());
        assert_eq!(parsed.lengths.dropped(), 0);
    }

    #[test]
    fn test_parse_inputs_accepts_digit_separators() {
        let inputs = stories("1_000", "0.0_1", "2_0e-3");
        assert_eq!(inputs[0].id, 1000);
        assert_eq!(inputs[0].seismic_ratio, 0.01);
        assert_eq!(inputs[0].wind_ratio, 0.02);
    }

    #[test]
    fn test_parse_inputs_rejects_misplaced_separators() {
        for bad in ["_1", "1_", "1__0"] {
            let err = parse_inputs(bad, "0.01", "0.01").unwrap_err();
            assert!(matches!(err, ParseError::InvalidLevel { position: 1, .. }), "{bad}");
        }
        let err = parse_inputs("1", "0._01", "0.01").unwrap_err();
        assert!(matches!(err, ParseError::InvalidRatio { field: InputField::Seismic, .. }));
    }
}
