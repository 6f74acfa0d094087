//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory (named the way Claude Code encodes it) with transcripts
    pub fn with_project(self, dir_name: &str, transcripts: &[TranscriptFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(dir_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `<session-id>.jsonl` transcript file
pub struct TranscriptFileBuilder {
    id: String,
    lines: Vec<String>,
    modified_secs: Option<u64>,
}

impl TranscriptFileBuilder {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), lines: Vec::new(), modified_secs: None }
    }

    /// Append a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line, written verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Set the file modification time as seconds since the epoch
    pub fn modified_at(mut self, secs: u64) -> Self {
        self.modified_secs = Some(secs);
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(format!("{}.jsonl", self.id));
        fs::write(&path, self.lines.join("\n")).expect("Failed to write transcript");

        if let Some(secs) = self.modified_secs {
            let file = fs::File::options().write(true).open(&path).expect("Failed to open transcript");
            file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
                .expect("Failed to set modification time");
        }

        path
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    role: Option<String>,
    content: Value,
    timestamp: Option<Value>,
    session_id: String,
    cwd: String,
    version: String,
    uuid: String,
}

impl RecordBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            record_type: "user".to_string(),
            role: Some("user".to_string()),
            content: json!("Test message"),
            timestamp: Some(json!("2025-01-15T10:00:00.000Z")),
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            cwd: "/Users/test/project".to_string(),
            version: "1.0.0".to_string(),
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: Some("assistant".to_string()),
            content: json!([{"type": "text", "text": "Test response"}]),
            timestamp: Some(json!("2025-01-15T10:00:05.000Z")),
            uuid: "550e8400-e29b-41d4-a716-446655440002".to_string(),
            ..Self::user()
        }
    }

    /// A summary record; `to_json` emits only the type and summary
    pub fn summary(text: &str) -> String {
        json!({"type": "summary", "summary": text, "leafUuid": "leaf"}).to_string()
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!(text);
        self
    }

    /// Set block-list content
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// Set arbitrary content, including shapes the viewer rejects
    pub fn raw_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    /// Drop `message.role` so the record type decides the role
    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    pub fn timestamp_ms(mut self, millis: i64) -> Self {
        self.timestamp = Some(json!(millis));
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut message = json!({"content": self.content});
        if let Some(role) = &self.role {
            message["role"] = json!(role);
        }

        let mut record = json!({
            "type": self.record_type,
            "message": message,
            "sessionId": self.session_id,
            "cwd": self.cwd,
            "version": self.version,
            "uuid": self.uuid,
        });
        if let Some(timestamp) = &self.timestamp {
            record["timestamp"] = timestamp.clone();
        }
        record.to_string()
    }
}

pub fn text_block(text: &str) -> Value {
    json!({"type": "text", "text": text})
}

pub fn thinking_block(text: &str) -> Value {
    json!({"type": "thinking", "thinking": text, "signature": "sig"})
}

pub fn tool_use_block(name: &str, input: Value) -> Value {
    json!({"type": "tool_use", "id": "toolu_01", "name": name, "input": input})
}

pub fn tool_result_block(content: Value) -> Value {
    json!({"type": "tool_result", "tool_use_id": "toolu_01", "content": content})
}

pub fn image_block() -> Value {
    json!({"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "AAAA"}})
}

/// Seconds since the epoch for a time `secs_ago` seconds before now
pub fn secs_ago(secs_ago: u64) -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("clock before epoch").as_secs() - secs_ago
}

/// Helper to create a .claude directory with an empty projects directory
pub fn minimal_claude_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("projects")).expect("Failed to create projects dir");
    dir
}

/// Helper to create a realistic .claude directory with sample data
///
/// Contains, newest first: `session-tools` (project /Users/test/api),
/// `session-chat` (project /Users/test/web), plus a `sessions-index.jsonl`
/// that must be ignored.
pub fn realistic_claude_dir() -> TempDir {
    let dir = ClaudeDirBuilder::new()
        .with_project(
            "-Users-test-web",
            &[TranscriptFileBuilder::new("session-chat")
                .with_raw_line(&RecordBuilder::summary("Greeting session"))
                .with_record(RecordBuilder::user().text("Hello from web"))
                .with_record(RecordBuilder::assistant())
                .modified_at(secs_ago(7200))],
        )
        .with_project(
            "-Users-test-api",
            &[TranscriptFileBuilder::new("session-tools")
                .with_record(RecordBuilder::user().text("Run the tests"))
                .with_record(RecordBuilder::assistant().blocks(vec![
                    thinking_block("Use cargo"),
                    tool_use_block("Bash", json!({"command": "cargo test", "description": "Run tests"})),
                ]))
                .with_record(RecordBuilder::user().blocks(vec![tool_result_block(json!("ok"))]))
                .modified_at(secs_ago(60))],
        )
        .build();

    fs::write(dir.path().join("projects").join("-Users-test-api").join("sessions-index.jsonl"), "{}")
        .expect("Failed to write sessions index");
    dir
}
