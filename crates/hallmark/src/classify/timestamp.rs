//! Timestamp detection for numeric fingerprints.
//!
//! A numeric column whose interquartile span sits inside a ±20-year window
//! around "now" is likely a UNIX timestamp. The test runs at three
//! resolutions, coarsest first.

use chrono::{DateTime, Duration, Utc};

use crate::fingerprint::NumberFingerprint;
use crate::schema::SpecialType;

/// Half-width of the plausible-timestamp window.
const WINDOW_YEARS: i64 = 20;

/// Scale factors per resolution, in evaluation order. Seconds come first so
/// a seconds-magnitude column is never claimed by a finer resolution whose
/// looser bounds it might also satisfy.
const SCALES: [(f64, SpecialType); 3] = [
    (1.0, SpecialType::UnixTimestampSeconds),
    (1_000.0, SpecialType::UnixTimestampMilliseconds),
    (1_000_000.0, SpecialType::UnixTimestampMicroseconds),
];

/// Epoch-second bounds of the plausible "recent date" window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampWindow {
    past: i64,
    future: i64,
}

impl TimestampWindow {
    /// Build the window around the current wall-clock time.
    pub fn around_now() -> Self {
        Self::around(Utc::now())
    }

    /// Build the window around an explicit reference time.
    pub fn around(now: DateTime<Utc>) -> Self {
        let half_width = Duration::days(WINDOW_YEARS * 365);
        Self {
            past: (now - half_width).timestamp(),
            future: (now + half_width).timestamp(),
        }
    }

    /// Whether both quartiles fall inside the window at the given scale.
    fn admits(&self, q1: f64, q3: f64, scale: f64) -> bool {
        q1 >= self.past as f64 * scale && q3 <= self.future as f64 * scale
    }
}

/// Pick a timestamp special type for a numeric column, if its quartiles fit.
///
/// Requires both quartiles to be present and finite; either one missing
/// disqualifies the column outright. The first resolution whose window
/// admits both quartiles wins.
pub fn classify_number(
    window: &TimestampWindow,
    fingerprint: &NumberFingerprint,
) -> Option<SpecialType> {
    let (q1, q3) = fingerprint.quartiles()?;
    SCALES
        .iter()
        .find(|&&(scale, _)| window.admits(q1, q3, scale))
        .map(|&(_, special_type)| special_type)
}
