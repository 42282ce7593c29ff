use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Errors from strict timestamp conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimestampError {
    #[error("unrecognized timestamp shape: {0}")]
    Unrecognized(&'static str),
    #[error("timestamp out of range: {0} ms")]
    OutOfRange(f64),
    #[error("string timestamps are passed through, not parsed")]
    Text,
}

/// The representations a persisted timestamp may arrive in
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampValue {
    /// `{ _seconds, _nanoseconds }` as written by the client SDK
    ClientSdk { seconds: f64, nanoseconds: f64 },
    /// `{ seconds, nanoseconds }` as written by the server SDK
    ServerSdk { seconds: f64, nanoseconds: f64 },
    /// A date value built in-process
    Native(DateTime<Utc>),
    /// An already-serialized string, kept as-is
    Text(String),
    /// Anything else; carries a short description of the shape for logging
    Unrecognized(&'static str),
}

impl TimestampValue {
    /// Classify a loosely-typed JSON value. Client-SDK fields are checked before
    /// server-SDK fields.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                if let Some((seconds, nanoseconds)) =
                    numeric_pair(map, "_seconds", "_nanoseconds")
                {
                    TimestampValue::ClientSdk { seconds, nanoseconds }
                } else if let Some((seconds, nanoseconds)) =
                    numeric_pair(map, "seconds", "nanoseconds")
                {
                    TimestampValue::ServerSdk { seconds, nanoseconds }
                } else {
                    TimestampValue::Unrecognized("object")
                }
            }
            Value::String(s) => TimestampValue::Text(s.clone()),
            Value::Null => TimestampValue::Unrecognized("null"),
            Value::Bool(_) => TimestampValue::Unrecognized("bool"),
            Value::Number(_) => TimestampValue::Unrecognized("number"),
            Value::Array(_) => TimestampValue::Unrecognized("array"),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TimestampValue::ClientSdk { .. } => "client_sdk",
            TimestampValue::ServerSdk { .. } => "server_sdk",
            TimestampValue::Native(_) => "native",
            TimestampValue::Text(_) => "text",
            TimestampValue::Unrecognized(shape) => shape,
        }
    }

    /// Strict conversion to an instant. Strings are not parsed.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            TimestampValue::ClientSdk { seconds, nanoseconds }
            | TimestampValue::ServerSdk { seconds, nanoseconds } => {
                from_parts(*seconds, *nanoseconds)
            }
            TimestampValue::Native(dt) => Ok(*dt),
            TimestampValue::Text(_) => Err(TimestampError::Text),
            TimestampValue::Unrecognized(shape) => Err(TimestampError::Unrecognized(shape)),
        }
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampValue::Native(dt)
    }
}

impl<'de> Deserialize<'de> for TimestampValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(TimestampValue::from_json(&value))
    }
}

fn numeric_pair(map: &Map<String, Value>, seconds: &str, nanoseconds: &str) -> Option<(f64, f64)> {
    let s = map.get(seconds)?.as_f64()?;
    let n = map.get(nanoseconds)?.as_f64()?;
    Some((s, n))
}

/// `seconds * 1000 + nanoseconds / 1e6` milliseconds, truncated toward zero
fn from_parts(seconds: f64, nanoseconds: f64) -> Result<DateTime<Utc>, TimestampError> {
    let millis = (seconds * 1000.0 + nanoseconds / 1_000_000.0).trunc();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimestampError::OutOfRange(millis));
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(TimestampError::OutOfRange(millis))
}

/// ISO 8601 with millisecond precision and a `Z` suffix
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Canonical string form of a timestamp. Strings are returned untouched and
/// anything unusable becomes the current instant.
pub fn normalize_timestamp(value: &TimestampValue) -> String {
    normalize(None, value)
}

/// Same as [`normalize_timestamp`], but a fallback warning also names the
/// record field the value came from.
pub fn normalize_field_timestamp(field: &'static str, value: &TimestampValue) -> String {
    normalize(Some(field), value)
}

// The single place a fallback is logged; never logs the value itself
fn normalize(field: Option<&'static str>, value: &TimestampValue) -> String {
    if let TimestampValue::Text(s) = value {
        return s.clone();
    }
    match value.to_datetime() {
        Ok(dt) => to_iso_string(&dt),
        Err(e) => {
            let shape = value.kind();
            match field {
                Some(field) => tracing::warn!(
                    field,
                    shape,
                    error = %e,
                    "timestamp fell back to current time"
                ),
                None => tracing::warn!(shape, error = %e, "timestamp fell back to current time"),
            }
            to_iso_string(&Utc::now())
        }
    }
}
