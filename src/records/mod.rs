//! Normalization of persisted documents whose timestamps arrive in mixed shapes.

pub mod document;
pub mod timestamp;

pub use document::{normalize_record, NormalizedRecord, PersistedRecord, TIMESTAMP_FIELDS};
pub use timestamp::{
    normalize_field_timestamp, normalize_timestamp, to_iso_string, TimestampError, TimestampValue,
};
