//! Data models for Claude Code transcripts.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`RawRecord`] - One decoded transcript line, every field optional
//! - [`Message`] and [`MessageContent`] - The normalized conversation model
//! - [`ContentBlock`] - Tagged union over text, thinking, tool use and tool result
//! - [`SessionMetadata`] and [`Transcript`] - Normalizer output for one file
//! - [`TranscriptFile`] and [`SessionSummary`] - Discovery input and catalog output
//!
//! Raw records use serde with lenient deserializers from
//! [`crate::parsers::deserializers`] so that a mistyped field never loses a line.

pub mod message;
pub mod record;
pub mod session;

pub use message::{ContentBlock, Message, MessageContent, Role, UNKNOWN_TOOL_NAME};
pub use record::{RawMessage, RawRecord};
pub use session::{SessionMetadata, SessionSummary, Transcript, TranscriptFile, session_title};
