//! Threshold rules for text fingerprints.

use crate::fingerprint::{TextFingerprint, TextIndicator};
use crate::schema::SpecialType;

/// Minimum fraction for structured formats (JSON, URL, email).
pub const HIGH_CONFIDENCE: f64 = 0.95;

/// Minimum fraction for US state abbreviations, a noisier indicator.
pub const LOW_CONFIDENCE: f64 = 0.70;

/// Indicator thresholds in evaluation order; the first passing row wins.
const THRESHOLDS: [(TextIndicator, SpecialType, f64); 4] = [
    (TextIndicator::Json, SpecialType::SerializedJson, HIGH_CONFIDENCE),
    (TextIndicator::Url, SpecialType::Url, HIGH_CONFIDENCE),
    (TextIndicator::Email, SpecialType::Email, HIGH_CONFIDENCE),
    (TextIndicator::State, SpecialType::State, LOW_CONFIDENCE),
];

/// Pick a special type for a text column, if any indicator clears its bar.
///
/// First-match, not best-match: when several indicators pass, declaration
/// order decides, not the highest fraction. An indicator the profiler did
/// not record simply does not pass.
pub fn classify_text(fingerprint: &TextFingerprint) -> Option<SpecialType> {
    THRESHOLDS
        .iter()
        .find_map(
            |&(indicator, special_type, minimum)| match fingerprint.fraction(indicator) {
                Some(fraction) if fraction >= minimum => Some(special_type),
                _ => None,
            },
        )
}
