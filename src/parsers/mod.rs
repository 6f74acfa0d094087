//! Decoding and normalization of Claude Code transcript files
//!
//! # Error Handling Strategy
//!
//! Transcripts are read on a **best-effort** basis:
//!
//! - **Individual line failures**: A line that is not a JSON object is skipped (logged at
//!   `debug`) and normalization continues with the next line. A line is atomic; there is
//!   no partial-record recovery.
//!
//! - **Missing or mistyped optional fields**: Replaced by documented defaults (empty
//!   string, `None` timestamp). They never surface as errors.
//!
//! - **Content contract violations**: A user/assistant message whose content is neither a
//!   string nor a list is reported as [`crate::error::TranscriptError::Content`], since
//!   it signals an upstream format change.
//!
//! - **Read failures**: Only [`parse_transcript_file`] does I/O; failures to open or read
//!   the file are reported as [`crate::error::TranscriptError::Io`].
//!
//! Nothing is retried: decoding is deterministic, so a retry cannot change the outcome.

pub mod deserializers;
pub mod record;
pub mod transcript;

pub use record::{RecordClass, classify, decode_line};
pub use transcript::{Normalizer, normalize, parse_transcript_file};
