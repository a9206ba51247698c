//! Field metadata for a cataloged column.

use serde::{Deserialize, Serialize};

use super::types::{BaseType, SpecialType};

/// Metadata for a single cataloged column.
///
/// Created and owned by the cataloging pipeline. The classifier only reads
/// it and produces fresh values; it never mutates a field in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column name, used as identity in diagnostics.
    pub name: String,
    /// Declared base type.
    pub base_type: BaseType,
    /// Fine-grained semantic tag, when one has been assigned.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub special_type: Option<SpecialType>,
    /// Snapshot of this field from before the current analysis pass began.
    ///
    /// Only consulted by the edit-guard, to distinguish a special type set
    /// by a person from one set by an earlier automated pass in the same
    /// batch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub previous_snapshot: Option<Box<Field>>,
}

impl Field {
    /// Create field metadata with no special type assigned.
    pub fn new(name: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            base_type,
            special_type: None,
            previous_snapshot: None,
        }
    }

    /// Set the special type.
    pub fn with_special_type(mut self, special_type: SpecialType) -> Self {
        self.special_type = Some(special_type);
        self
    }

    /// Attach the pre-analysis-pass snapshot of this field.
    pub fn with_previous_snapshot(mut self, snapshot: Field) -> Self {
        self.previous_snapshot = Some(Box::new(snapshot));
        self
    }
}
