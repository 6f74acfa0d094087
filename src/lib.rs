//! Claude Chat Viewer - Read Claude Code conversation transcripts as HTML
//!
//! Claude Code stores every conversation as a JSONL transcript under
//! `~/.claude/projects/<project-dir>/<session-id>.jsonl`. This library turns
//! those transcripts into readable pages:
//!
//! - Decoding transcript lines into raw records, skipping lines that are not JSON objects
//! - Normalizing records into user/assistant messages and session metadata
//! - Rendering message content as plain text or as formatted fragments
//! - Cataloging transcripts for listings, static sites, and a live server
//!
//! # Example
//!
//! ```
//! use claude_chat_viewer::{extract_plain_text, normalize};
//!
//! let lines = [
//!     r#"{"type":"user","sessionId":"s1","message":{"role":"user","content":"hi"}}"#,
//!     "not json",
//!     r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"hello"}]}}"#,
//! ];
//! let transcript = normalize(lines)?;
//! assert_eq!(transcript.messages.len(), 2);
//! assert_eq!(transcript.metadata.session_id, "s1");
//! assert_eq!(extract_plain_text(&transcript.messages[1].content), "hello");
//! # Ok::<(), claude_chat_viewer::TranscriptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use error::{ContentError, DecodeError, TranscriptError};
pub use indexer::{build_catalog, summarize};
pub use models::{ContentBlock, Message, MessageContent, Role, SessionMetadata, SessionSummary};
pub use parsers::{normalize, parse_transcript_file};
pub use render::{Fragment, extract_plain_text, render_formatted};
pub use utils::paths::decode_project_dir;
