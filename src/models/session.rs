use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::message::Message;

/// Session-level metadata captured while normalizing a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetadata {
    pub session_id: String,
    pub cwd: String,
    pub version: String,
    pub summary: Option<String>,
}

/// Output of normalizing one transcript
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub messages: Vec<Message>,
    pub metadata: SessionMetadata,
}

/// A transcript file found on disk, before it is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    pub id: String,
    pub project_path: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
    pub size_bytes: u64,
}

/// One catalog entry describing a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: String,
    pub project_path: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
    pub size_bytes: u64,
    pub message_count: usize,
    pub preview: String,
    pub summary: Option<String>,
}

impl SessionSummary {
    /// Display title: the transcript summary, falling back to a shortened id
    pub fn title(&self, id_chars: usize) -> String {
        session_title(self.summary.as_deref(), &self.id, id_chars)
    }
}

/// A session's summary, or `Session <first id_chars of id>` when it has none
pub fn session_title(summary: Option<&str>, id: &str, id_chars: usize) -> String {
    match summary {
        Some(summary) => summary.to_string(),
        None => format!("Session {}", id.chars().take(id_chars).collect::<String>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_title_prefers_summary() {
        assert_eq!(session_title(Some("Refactor parser"), "abcdef123456", 8), "Refactor parser");
    }

    #[test]
    fn test_session_title_falls_back_to_short_id() {
        assert_eq!(session_title(None, "abcdef123456789", 8), "Session abcdef12");
        assert_eq!(session_title(None, "abcdef123456789", 12), "Session abcdef123456");
        assert_eq!(session_title(None, "ab", 8), "Session ab");
    }
}
