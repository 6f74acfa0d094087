use serde::Deserialize;
use serde_json::Value;

use crate::error::DecodeError;
use crate::models::{RawMessage, RawRecord};

/// What a decoded record contributes to a transcript
#[derive(Debug, Clone, PartialEq)]
pub enum RecordClass {
    /// Carries the transcript summary (possibly empty); never a message
    Summary(Option<String>),
    /// Nothing renderable: snapshot markers, records without a message, etc.
    Skippable,
    /// Has a non-empty nested message object
    Message(RawMessage),
}

/// Decode one transcript line into a record.
///
/// A line is atomic: it either decodes completely or fails, there is no
/// partial recovery.
pub fn decode_line(line: &str) -> Result<RawRecord, DecodeError> {
    // Go through Value so that JSON arrays are not accepted as positional structs
    match serde_json::from_str::<Value>(line)? {
        object @ Value::Object(_) => Ok(RawRecord::deserialize(object)?),
        Value::Array(_) => Err(DecodeError::NotAnObject { found: "array" }),
        Value::String(_) => Err(DecodeError::NotAnObject { found: "string" }),
        Value::Number(_) => Err(DecodeError::NotAnObject { found: "number" }),
        Value::Bool(_) => Err(DecodeError::NotAnObject { found: "boolean" }),
        Value::Null => Err(DecodeError::NotAnObject { found: "null" }),
    }
}

/// Classify a decoded record.
///
/// Checks are ordered: summary first, then known non-message discriminators,
/// then presence of a usable `message` object.
pub fn classify(record: &RawRecord) -> RecordClass {
    if record.is_summary() {
        return RecordClass::Summary(record.summary.clone());
    }

    if record.is_skippable_kind() {
        return RecordClass::Skippable;
    }

    match record.raw_message() {
        Some(message) => RecordClass::Message(message),
        None => RecordClass::Skippable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_line() {
        let record = decode_line(r#"{"type":"user","uuid":"u-1"}"#).unwrap();
        assert_eq!(record.kind.as_deref(), Some("user"));
        assert_eq!(record.uuid.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(decode_line("invalid json line").is_err());
        assert!(decode_line(r#"{"type":"user""#).is_err());
    }

    #[test]
    fn test_decode_non_object_json() {
        // Valid JSON, but not a record
        assert!(decode_line("[1, 2, 3]").is_err());
        assert!(decode_line("\"text\"").is_err());
    }

    #[test]
    fn test_decode_error_message() {
        let err = decode_line("nope").unwrap_err();
        assert!(err.to_string().contains("invalid JSON record"));
    }

    #[test]
    fn test_classify_summary() {
        let record =
            decode_line(r#"{"type":"summary","summary":"Refactor parser","leafUuid":"x"}"#).unwrap();
        assert_eq!(classify(&record), RecordClass::Summary(Some("Refactor parser".to_string())));
    }

    #[test]
    fn test_classify_summary_without_text() {
        let record = decode_line(r#"{"type":"summary"}"#).unwrap();
        assert_eq!(classify(&record), RecordClass::Summary(None));
    }

    #[test]
    fn test_classify_snapshot_is_skippable() {
        let record = decode_line(
            r#"{"type":"file-history-snapshot","message":{"role":"user","content":"x"}}"#,
        )
        .unwrap();
        assert_eq!(classify(&record), RecordClass::Skippable);
    }

    #[test]
    fn test_classify_without_message_is_skippable() {
        let record = decode_line(r#"{"type":"system","content":"local command"}"#).unwrap();
        assert_eq!(classify(&record), RecordClass::Skippable);

        let record = decode_line(r#"{"type":"user","message":{}}"#).unwrap();
        assert_eq!(classify(&record), RecordClass::Skippable);
    }

    #[test]
    fn test_classify_message() {
        let record =
            decode_line(r#"{"type":"assistant","message":{"role":"assistant","content":"ok"}}"#)
                .unwrap();
        match classify(&record) {
            RecordClass::Message(message) => assert_eq!(message.role.as_deref(), Some("assistant")),
            other => panic!("expected message, got {:?}", other),
        }
    }
}
