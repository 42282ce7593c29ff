use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::timestamp::{normalize_field_timestamp, TimestampValue};

/// Field names that may carry a timestamp, in their stored spelling
pub const TIMESTAMP_FIELDS: [&str; 5] =
    ["createdAt", "updatedAt", "lastLoginAt", "timestamp", "ttl"];

/// A record as read back from the document store.
///
/// The five timestamp fields are explicit; everything else is carried in
/// `fields` untouched. A timestamp key that is present but `null` is kept as
/// `Some(Unrecognized)` so it is still normalized.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    #[serde(default, deserialize_with = "present")]
    pub created_at: Option<TimestampValue>,
    #[serde(default, deserialize_with = "present")]
    pub updated_at: Option<TimestampValue>,
    #[serde(default, deserialize_with = "present")]
    pub last_login_at: Option<TimestampValue>,
    #[serde(default, deserialize_with = "present")]
    pub timestamp: Option<TimestampValue>,
    #[serde(default, deserialize_with = "present")]
    pub ttl: Option<TimestampValue>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A record whose timestamp fields are ISO 8601 strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

// Only invoked when the key exists, so `null` becomes Some(Unrecognized)
fn present<'de, D>(deserializer: D) -> Result<Option<TimestampValue>, D::Error>
where
    D: Deserializer<'de>,
{
    TimestampValue::deserialize(deserializer).map(Some)
}

impl PersistedRecord {
    /// Build from a loosely-typed JSON object
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl NormalizedRecord {
    pub fn into_json(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn normalize_field(name: &'static str, value: Option<&TimestampValue>) -> Option<String> {
    value.map(|v| normalize_field_timestamp(name, v))
}

/// Copy of `record` with each present timestamp field normalized.
/// Absent fields stay absent and an absent record yields `None`.
pub fn normalize_record(record: Option<&PersistedRecord>) -> Option<NormalizedRecord> {
    let record = record?;
    Some(NormalizedRecord {
        created_at: normalize_field("createdAt", record.created_at.as_ref()),
        updated_at: normalize_field("updatedAt", record.updated_at.as_ref()),
        last_login_at: normalize_field("lastLoginAt", record.last_login_at.as_ref()),
        timestamp: normalize_field("timestamp", record.timestamp.as_ref()),
        ttl: normalize_field("ttl", record.ttl.as_ref()),
        fields: record.fields.clone(),
    })
}
