//! Core type definitions for column metadata.

use serde::{Deserialize, Serialize};

/// Coarse structural type of a column, as declared by the source system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    /// Free-form or structured text.
    Text,
    /// Machine-width whole numbers.
    Integer,
    /// Arbitrary-precision whole numbers.
    BigInteger,
    /// Fixed-point decimal numbers.
    Decimal,
    /// Floating-point numbers.
    Float,
    /// Boolean values (true/false).
    Boolean,
    /// Date and/or time values.
    DateTime,
    /// Declared type not recognized.
    Unknown,
}

impl BaseType {
    /// Returns true if this type belongs to the text family.
    pub fn is_textual(&self) -> bool {
        matches!(self, BaseType::Text)
    }

    /// Returns true if this type belongs to the number family.
    ///
    /// Deliberately broad: some source systems declare big-integer columns
    /// with a decimal-like base type, and the numeric rules must still apply
    /// to those.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            BaseType::Integer | BaseType::BigInteger | BaseType::Decimal | BaseType::Float
        )
    }
}

impl Default for BaseType {
    fn default() -> Self {
        BaseType::Unknown
    }
}

/// Fine-grained semantic tag layered atop a base type.
///
/// Single-valued and mutually exclusive; a column carries at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialType {
    /// Values are serialized JSON documents.
    SerializedJson,
    /// Values are URLs.
    Url,
    /// Values are email addresses.
    Email,
    /// Values are US state abbreviations.
    State,
    /// Values are UNIX timestamps in seconds.
    UnixTimestampSeconds,
    /// Values are UNIX timestamps in milliseconds.
    UnixTimestampMilliseconds,
    /// Values are UNIX timestamps in microseconds.
    UnixTimestampMicroseconds,
}

impl SpecialType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SpecialType::SerializedJson => "Serialized JSON",
            SpecialType::Url => "URL",
            SpecialType::Email => "Email",
            SpecialType::State => "State",
            SpecialType::UnixTimestampSeconds => "UNIX Timestamp (Seconds)",
            SpecialType::UnixTimestampMilliseconds => "UNIX Timestamp (Milliseconds)",
            SpecialType::UnixTimestampMicroseconds => "UNIX Timestamp (Microseconds)",
        }
    }
}
