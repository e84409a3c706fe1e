//! Identifier newtype with a smart constructor.
//!
//! Record ids are opaque strings used as render and selection keys. The raw
//! constructor is never exported; `RecordId::new` validates non-emptiness so
//! a selection can never point at "nothing".

use std::fmt;
use thiserror::Error;

/// Stable identifier of a record within one collection.
///
/// Unique for the lifetime of the collection; ids are never reused for a
/// different underlying entity. Ingestion synthesizes a positional id when
/// the source row carries none, so every record ends up addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

/// Error returned when constructing a [`RecordId`] from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record id must be non-empty")]
pub struct InvalidRecordId;

impl RecordId {
    /// Smart constructor: rejects empty ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidRecordId)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
