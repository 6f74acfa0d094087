use chrono::{DateTime, Local, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
/// A month is counted as 30 days
const MONTH: i64 = 30 * DAY;

/// Format a timestamp relative to now: "just now", "5m ago", "3h ago", "2d ago",
/// "1w ago", "4mo ago", "2y ago"
pub fn format_relative(timestamp: &DateTime<Utc>) -> String {
    format_relative_at(timestamp, &Utc::now())
}

/// [`format_relative`] against an explicit reference time.
///
/// Timestamps in the future of `now` are reported as "just now".
pub fn format_relative_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();

    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else if seconds < WEEK {
        format!("{}d ago", seconds / DAY)
    } else if seconds < MONTH {
        format!("{}w ago", seconds / WEEK)
    } else {
        let months = seconds / MONTH;
        if months < 12 { format!("{}mo ago", months) } else { format!("{}y ago", months / 12) }
    }
}

/// Message timestamp in local time, `YYYY-MM-DD HH:MM:SS`. Missing timestamps are empty.
pub fn format_message_time(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Minute-precision local time used for file modification times
pub fn format_modified_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
