//! Edit-guard: decides whether overwriting a field's special type is allowed.

use crate::schema::Field;

/// Returns true when the classifier may set `special_type` on this field.
///
/// Editing is allowed when the field has no special type yet, or when the
/// current value came from an earlier automated pass in the same batch,
/// recognizable because the pre-pass snapshot carried none. A special type
/// with no snapshot to vouch for it is treated as user-set and left alone.
pub fn can_edit_special_type(field: &Field) -> bool {
    match (&field.special_type, &field.previous_snapshot) {
        (None, _) => true,
        (Some(_), Some(snapshot)) => snapshot.special_type.is_none(),
        (Some(_), None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BaseType, SpecialType};

    #[test]
    fn test_unclassified_field_is_editable() {
        let field = Field::new("email", BaseType::Text);
        assert!(can_edit_special_type(&field));
    }

    #[test]
    fn test_user_set_type_is_locked() {
        let field = Field::new("email", BaseType::Text).with_special_type(SpecialType::Email);
        assert!(!can_edit_special_type(&field));
    }

    #[test]
    fn test_prior_automated_guess_is_editable() {
        let field = Field::new("email", BaseType::Text)
            .with_special_type(SpecialType::Url)
            .with_previous_snapshot(Field::new("email", BaseType::Text));
        assert!(can_edit_special_type(&field));
    }

    #[test]
    fn test_snapshot_with_user_type_is_locked() {
        let snapshot =
            Field::new("email", BaseType::Text).with_special_type(SpecialType::Email);
        let field = Field::new("email", BaseType::Text)
            .with_special_type(SpecialType::Email)
            .with_previous_snapshot(snapshot);
        assert!(!can_edit_special_type(&field));
    }

    #[test]
    fn test_snapshot_alone_does_not_lock() {
        let field = Field::new("email", BaseType::Text)
            .with_previous_snapshot(Field::new("email", BaseType::Text));
        assert!(can_edit_special_type(&field));
    }
}
