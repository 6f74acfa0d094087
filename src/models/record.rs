use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::parsers::deserializers::{lenient_string, lenient_timestamp};

/// Discriminator value of a record that carries a session summary
pub const KIND_SUMMARY: &str = "summary";

/// Discriminators of records that never carry renderable content
pub const SKIPPABLE_KINDS: &[&str] = &["file-history-snapshot"];

/// One decoded JSON object from a transcript line.
///
/// Every field is optional. Fields that arrive with an unexpected JSON type are
/// treated as absent rather than failing the whole line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
}

/// The nested `message` object of a record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
}

impl RawRecord {
    /// Nested message, if present as a non-empty object.
    ///
    /// A `message` that is missing, `null`, an empty object or not an object at
    /// all is reported as `None`.
    pub fn raw_message(&self) -> Option<RawMessage> {
        match &self.message {
            Some(Value::Object(map)) if !map.is_empty() => {
                RawMessage::deserialize(Value::Object(map.clone())).ok()
            }
            _ => None,
        }
    }

    pub fn is_skippable_kind(&self) -> bool {
        self.kind.as_deref().is_some_and(|kind| SKIPPABLE_KINDS.contains(&kind))
    }

    pub fn is_summary(&self) -> bool {
        self.summary.is_some() || self.kind.as_deref() == Some(KIND_SUMMARY)
    }
}
