//! Statistical fingerprints produced by the upstream profiling stage.
//!
//! A fingerprint is an immutable summary of a column's sampled values:
//! per-indicator match fractions for text columns, distribution statistics
//! for numeric columns. The classifier only ever reads them; it performs no
//! validation beyond checking variant shape and presence of sub-fields.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete fingerprint for one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Statistics computed for every column regardless of base type.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub global: Option<GlobalFingerprint>,
    /// Statistics specific to the column's base-type category.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_specific: Option<TypeSpecific>,
}

impl Fingerprint {
    /// Decode a fingerprint from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wrap a text fingerprint.
    pub fn text(text: TextFingerprint) -> Self {
        Self {
            global: None,
            type_specific: Some(TypeSpecific::Text(text)),
        }
    }

    /// Wrap a number fingerprint.
    pub fn number(number: NumberFingerprint) -> Self {
        Self {
            global: None,
            type_specific: Some(TypeSpecific::Number(number)),
        }
    }

    /// Get the text-shaped payload, if present.
    pub fn as_text(&self) -> Option<&TextFingerprint> {
        match self.type_specific {
            Some(TypeSpecific::Text(ref text)) => Some(text),
            _ => None,
        }
    }

    /// Get the number-shaped payload, if present.
    pub fn as_number(&self) -> Option<&NumberFingerprint> {
        match self.type_specific {
            Some(TypeSpecific::Number(ref number)) => Some(number),
            _ => None,
        }
    }
}

/// Type-specific branch of a fingerprint, keyed by base-type category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeSpecific {
    /// Fingerprint of a text column.
    Text(TextFingerprint),
    /// Fingerprint of a numeric column.
    Number(NumberFingerprint),
}

/// Statistics computed for every column regardless of base type.
///
/// Recorded by the profiler for downstream consumers; the threshold rules do
/// not consult them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalFingerprint {
    /// Number of distinct non-null values in the sample.
    #[serde(
        rename = "distinct-count",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub distinct_count: Option<u64>,
    /// Share of null values in the sample.
    #[serde(rename = "nil%", skip_serializing_if = "Option::is_none", default)]
    pub nil_fraction: Option<f64>,
}

/// Indicator names recorded in a text fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextIndicator {
    /// Share of values parsing as JSON documents.
    Json,
    /// Share of values shaped like URLs.
    Url,
    /// Share of values shaped like email addresses.
    Email,
    /// Share of values matching US state abbreviations.
    State,
}

/// Fingerprint of a text column: per-indicator match fractions in [0, 1].
///
/// Each fraction is the share of non-null sampled values that satisfied the
/// indicator. An absent indicator was not computed upstream; the rules treat
/// it the same as a failing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFingerprint {
    #[serde(rename = "percent-json", skip_serializing_if = "Option::is_none", default)]
    pub percent_json: Option<f64>,
    #[serde(rename = "percent-url", skip_serializing_if = "Option::is_none", default)]
    pub percent_url: Option<f64>,
    #[serde(rename = "percent-email", skip_serializing_if = "Option::is_none", default)]
    pub percent_email: Option<f64>,
    #[serde(rename = "percent-state", skip_serializing_if = "Option::is_none", default)]
    pub percent_state: Option<f64>,
    /// Mean value length; recorded by the profiler but unused by the rules.
    #[serde(
        rename = "average-length",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub average_length: Option<f64>,
}

impl TextFingerprint {
    /// Get the recorded fraction for an indicator, if it was computed.
    pub fn fraction(&self, indicator: TextIndicator) -> Option<f64> {
        match indicator {
            TextIndicator::Json => self.percent_json,
            TextIndicator::Url => self.percent_url,
            TextIndicator::Email => self.percent_email,
            TextIndicator::State => self.percent_state,
        }
    }
}

/// Fingerprint of a numeric column: distribution statistics.
///
/// Every statistic is optional; a degenerate sample can make any of them
/// uncomputable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberFingerprint {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sd: Option<f64>,
    /// First quartile (25th percentile).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub q1: Option<f64>,
    /// Third quartile (75th percentile).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub q3: Option<f64>,
}

impl NumberFingerprint {
    /// Convenience constructor from the two quartiles alone.
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        Self {
            q1: Some(q1),
            q3: Some(q3),
            ..Self::default()
        }
    }

    /// Both quartiles, when both are present and finite.
    pub fn quartiles(&self) -> Option<(f64, f64)> {
        match (self.q1, self.q3) {
            (Some(q1), Some(q3)) if q1.is_finite() && q3.is_finite() => Some((q1, q3)),
            _ => None,
        }
    }
}
