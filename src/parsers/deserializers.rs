use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a timestamp.
///
/// Numbers are Unix timestamps in milliseconds; strings are RFC3339 / ISO-8601.
/// Strings without an offset are read as local time.
/// Anything else, or a value that cannot be parsed, yields `None`.
pub fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let ms = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(ms)
        }
        Value::String(s) => s.parse::<DateTime<Utc>>().ok().or_else(|| parse_naive(s)),
        _ => None,
    }
}

/// Offset-less ISO-8601, `T` or space separated, interpreted in the local zone
fn parse_naive(s: &str) -> Option<DateTime<Utc>> {
    let naive = s
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    // Times skipped by a DST jump have no local reading; fall back to UTC
    Some(match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => naive.and_utc(),
    })
}

/// Deserializer for timestamps that accepts both integers (ms) and RFC3339 strings.
///
/// Unlike a strict deserializer this never fails: a malformed timestamp leaves the
/// rest of the record usable.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(timestamp_from_value(&value))
}

/// Deserializer for optional string fields that treats non-strings as absent
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
