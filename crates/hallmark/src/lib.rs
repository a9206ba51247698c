//! Hallmark: fingerprint-driven special type inference for cataloged columns.
//!
//! Hallmark decides whether a column deserves a finer-grained semantic tag
//! (email, URL, serialized JSON, US state, UNIX timestamp) using only the
//! statistical fingerprint computed by an upstream profiling stage. Raw
//! column values are never consulted.
//!
//! # Core Principles
//!
//! - **Fingerprint-only**: classification reads precomputed summaries, never source data
//! - **Non-destructive**: input metadata is never modified; a new value is returned
//! - **User decisions win**: a special type chosen by a person is never overwritten
//!
//! # Example
//!
//! ```
//! use hallmark::{BaseType, Classifier, Field, Fingerprint, SpecialType};
//!
//! let classifier = Classifier::new();
//! let field = Field::new("contact_email", BaseType::Text);
//! let fingerprint = Fingerprint::from_json(
//!     r#"{"type": {"Text": {"percent-email": 0.97, "percent-url": 0.4}}}"#,
//! ).unwrap();
//!
//! let updated = classifier.classify(&field, Some(&fingerprint)).unwrap();
//! assert_eq!(updated.special_type, Some(SpecialType::Email));
//! ```

pub mod classify;
pub mod error;
pub mod fingerprint;
pub mod schema;

pub use classify::{Classifier, TimestampWindow, can_edit_special_type};
pub use error::{HallmarkError, Result};
pub use fingerprint::{
    Fingerprint, GlobalFingerprint, NumberFingerprint, TextFingerprint, TextIndicator,
    TypeSpecific,
};
pub use schema::{BaseType, Field, SpecialType};
