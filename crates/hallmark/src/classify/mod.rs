//! The fingerprint-to-special-type inference engine.
//!
//! Given a column's declared base type and its fingerprint, selects zero or
//! one special type by applying base-type-specific threshold rules, after an
//! edit-guard check that protects classifications a person has made.

mod guard;
mod text;
mod timestamp;

pub use guard::can_edit_special_type;
pub use text::{HIGH_CONFIDENCE, LOW_CONFIDENCE, classify_text};
pub use timestamp::{TimestampWindow, classify_number};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::fingerprint::Fingerprint;
use crate::schema::{Field, SpecialType};

/// Plausible-timestamp window shared by every classifier in the process.
///
/// Computed once at first use and never refreshed: a process that runs long
/// enough to drift near the 20-year boundary keeps the bounds it started
/// with.
static RECENT_WINDOW: Lazy<TimestampWindow> = Lazy::new(TimestampWindow::around_now);

/// The fingerprint classification engine.
///
/// Stateless per invocation; safe to share and call concurrently for
/// independent (field, fingerprint) pairs.
pub struct Classifier {
    window: TimestampWindow,
}

impl Classifier {
    /// Create a classifier using the process-wide timestamp window.
    pub fn new() -> Self {
        Self {
            window: *RECENT_WINDOW,
        }
    }

    /// Create a classifier with an explicit timestamp window.
    pub fn with_window(window: TimestampWindow) -> Self {
        Self { window }
    }

    /// Classify one column from its fingerprint.
    ///
    /// Returns a copy of `field` with `special_type` set when a rule fires,
    /// or `None` when nothing should change: the edit-guard forbids editing,
    /// the fingerprint is absent or mismatched in shape, or no rule passes.
    /// The input field is never modified.
    pub fn classify(&self, field: &Field, fingerprint: Option<&Fingerprint>) -> Option<Field> {
        if !can_edit_special_type(field) {
            return None;
        }
        let special_type = self.dispatch(field, fingerprint?)?;
        debug!(
            field = %field.name,
            special_type = special_type.label(),
            "inferred special type from fingerprint"
        );
        Some(field.clone().with_special_type(special_type))
    }

    /// Route the fingerprint to the rule set for the field's type family.
    ///
    /// A fingerprint whose shape does not correspond to the base type
    /// degrades silently to no inference rather than signaling a mismatch.
    fn dispatch(&self, field: &Field, fingerprint: &Fingerprint) -> Option<SpecialType> {
        if field.base_type.is_textual() {
            classify_text(fingerprint.as_text()?)
        } else if field.base_type.is_numeric() {
            classify_number(&self.window, fingerprint.as_number()?)
        } else {
            None
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::{NumberFingerprint, TextFingerprint};
    use crate::schema::BaseType;
    use chrono::{TimeZone, Utc};

    fn fixed_classifier() -> Classifier {
        Classifier::with_window(TimestampWindow::around(
            Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap(),
        ))
    }

    fn email_fingerprint() -> Fingerprint {
        Fingerprint::text(TextFingerprint {
            percent_email: Some(0.97),
            percent_url: Some(0.4),
            ..TextFingerprint::default()
        })
    }

    #[test]
    fn test_text_field_classified_as_email() {
        let field = Field::new("contact_email", BaseType::Text);
        let updated = fixed_classifier()
            .classify(&field, Some(&email_fingerprint()))
            .unwrap();

        assert_eq!(updated.special_type, Some(SpecialType::Email));
        assert_eq!(updated.name, field.name);
        assert_eq!(field.special_type, None);
    }

    #[test]
    fn test_numeric_field_classified_as_timestamp() {
        let field = Field::new("created_at", BaseType::Integer);
        let fingerprint = Fingerprint::number(NumberFingerprint::from_quartiles(1.4e9, 1.7e9));
        let updated = fixed_classifier()
            .classify(&field, Some(&fingerprint))
            .unwrap();

        assert_eq!(
            updated.special_type,
            Some(SpecialType::UnixTimestampSeconds)
        );
    }

    #[test]
    fn test_decimal_base_type_admitted_to_timestamp_rules() {
        let field = Field::new("event_time", BaseType::Decimal);
        let fingerprint = Fingerprint::number(NumberFingerprint::from_quartiles(1.4e9, 1.7e9));

        assert!(fixed_classifier().classify(&field, Some(&fingerprint)).is_some());
    }

    #[test]
    fn test_guard_blocks_user_set_type() {
        let field = Field::new("contact_email", BaseType::Text)
            .with_special_type(SpecialType::State);

        assert!(fixed_classifier()
            .classify(&field, Some(&email_fingerprint()))
            .is_none());
    }

    #[test]
    fn test_reclassifies_prior_automated_guess() {
        let field = Field::new("contact_email", BaseType::Text)
            .with_special_type(SpecialType::Url)
            .with_previous_snapshot(Field::new("contact_email", BaseType::Text));

        let updated = fixed_classifier()
            .classify(&field, Some(&email_fingerprint()))
            .unwrap();
        assert_eq!(updated.special_type, Some(SpecialType::Email));
    }

    #[test]
    fn test_second_pass_is_no_change() {
        let classifier = fixed_classifier();
        let field = Field::new("contact_email", BaseType::Text);
        let fingerprint = email_fingerprint();

        let first = classifier.classify(&field, Some(&fingerprint)).unwrap();
        // The result of the first pass carries no snapshot, so the guard
        // treats its special type as settled.
        assert!(classifier.classify(&first, Some(&fingerprint)).is_none());
    }

    #[test]
    fn test_missing_fingerprint_is_no_change() {
        let field = Field::new("contact_email", BaseType::Text);
        assert!(fixed_classifier().classify(&field, None).is_none());
    }

    #[test]
    fn test_shape_mismatch_degrades_silently() {
        let text_field = Field::new("notes", BaseType::Text);
        let number_fingerprint =
            Fingerprint::number(NumberFingerprint::from_quartiles(1.4e9, 1.7e9));
        assert!(fixed_classifier()
            .classify(&text_field, Some(&number_fingerprint))
            .is_none());

        let numeric_field = Field::new("amount", BaseType::Integer);
        let text_fingerprint = email_fingerprint();
        assert!(fixed_classifier()
            .classify(&numeric_field, Some(&text_fingerprint))
            .is_none());
    }

    #[test]
    fn test_unrelated_base_type_is_no_change() {
        let field = Field::new("is_active", BaseType::Boolean);
        assert!(fixed_classifier()
            .classify(&field, Some(&email_fingerprint()))
            .is_none());
    }

    #[test]
    fn test_empty_fingerprint_is_no_change() {
        let field = Field::new("contact_email", BaseType::Text);
        assert!(fixed_classifier()
            .classify(&field, Some(&Fingerprint::default()))
            .is_none());
    }
}
