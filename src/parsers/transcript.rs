use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TranscriptError;
use crate::models::{
    Message, MessageContent, RawMessage, RawRecord, Role, SessionMetadata, Transcript,
};
use crate::parsers::record::{RecordClass, classify, decode_line};

/// First-seen-wins metadata for one transcript.
///
/// Lives inside a single [`Normalizer`], so concurrent normalization of different
/// transcripts never shares it.
#[derive(Debug, Default)]
struct MetadataAccumulator {
    metadata: SessionMetadata,
}

impl MetadataAccumulator {
    fn record_summary(&mut self, summary: Option<String>) {
        if self.metadata.summary.is_some() {
            return;
        }
        self.metadata.summary = summary.filter(|s| !s.is_empty());
    }

    /// Capture session fields from a message-bearing record unless a session id
    /// has already been captured
    fn capture_session(&mut self, record: &RawRecord) {
        if !self.metadata.session_id.is_empty() {
            return;
        }
        self.metadata.session_id = record.session_id.clone().unwrap_or_default();
        self.metadata.cwd = record.cwd.clone().unwrap_or_default();
        self.metadata.version = record.version.clone().unwrap_or_default();
    }
}

/// Resolve the role of a message-bearing record.
///
/// Priority: `message.role`, then the record's own discriminator.
fn resolve_role(message: &RawMessage, record: &RawRecord) -> Option<Role> {
    let candidates = [message.role.as_deref(), record.kind.as_deref()];
    candidates.into_iter().flatten().next().and_then(Role::parse)
}

/// Incremental transcript normalizer.
///
/// Feed lines in file order with [`Normalizer::push_line`]; messages come out in
/// the same order, without sorting or deduplication.
#[derive(Debug, Default)]
pub struct Normalizer {
    messages: Vec<Message>,
    accumulator: MetadataAccumulator,
    skipped_lines: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw line. `line_num` is 1-based and only used for diagnostics.
    ///
    /// Undecodable lines are skipped. Fails only when a message's content has a
    /// shape the content model cannot represent.
    pub fn push_line(&mut self, line_num: usize, line: &str) -> Result<(), TranscriptError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        match decode_line(line) {
            Ok(record) => self.push_record(line_num, record),
            Err(e) => {
                debug!(line = line_num, error = %e, "skipping undecodable transcript line");
                self.skipped_lines += 1;
                Ok(())
            }
        }
    }

    /// Process one decoded record
    pub fn push_record(&mut self, line_num: usize, record: RawRecord) -> Result<(), TranscriptError> {
        let message = match classify(&record) {
            RecordClass::Summary(summary) => {
                self.accumulator.record_summary(summary);
                return Ok(());
            }
            RecordClass::Skippable => return Ok(()),
            RecordClass::Message(message) => message,
        };

        let Some(role) = resolve_role(&message, &record) else {
            return Ok(());
        };

        let content = MessageContent::from_value(message.content)
            .map_err(|source| TranscriptError::Content { line: line_num, source })?;

        self.accumulator.capture_session(&record);
        self.messages.push(Message {
            role,
            content,
            timestamp: record.timestamp,
            id: record.uuid.unwrap_or_default(),
        });

        Ok(())
    }

    /// Number of lines dropped because they could not be decoded
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn finish(self) -> Transcript {
        Transcript { messages: self.messages, metadata: self.accumulator.metadata }
    }
}

/// Normalize the lines of one transcript into messages and session metadata
pub fn normalize<I, S>(lines: I) -> Result<Transcript, TranscriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalizer = Normalizer::new();
    for (idx, line) in lines.into_iter().enumerate() {
        normalizer.push_line(idx + 1, line.as_ref())?;
    }
    Ok(normalizer.finish())
}

/// Read and normalize a transcript file.
///
/// Lines that are not valid UTF-8 are treated like undecodable lines and skipped.
pub fn parse_transcript_file(path: &Path) -> Result<Transcript, TranscriptError> {
    let io_error = |source| TranscriptError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut normalizer = Normalizer::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(io_error)?;
        match std::str::from_utf8(&line) {
            Ok(text) => normalizer.push_line(idx + 1, text)?,
            Err(e) => {
                debug!(path = %path.display(), line = idx + 1, error = %e, "skipping non UTF-8 line");
                normalizer.skipped_lines += 1;
            }
        }
    }

    if normalizer.skipped_lines() > 0 {
        debug!(
            path = %path.display(),
            messages = normalizer.messages.len(),
            skipped = normalizer.skipped_lines(),
            "normalized transcript with skipped lines"
        );
    }

    Ok(normalizer.finish())
}
