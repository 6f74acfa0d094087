//! Error types for the transcript pipeline.
//!
//! Only three things can go wrong inside the core:
//!
//! - a single line is not valid JSON ([`DecodeError`]); the normalizer recovers
//!   by skipping the line
//! - message content has a shape the content model does not know ([`ContentError`]);
//!   this is an upstream format change and is surfaced to the caller
//! - the transcript file itself cannot be read ([`TranscriptError::Io`])
//!
//! Everything above the core (indexer, writer, CLI, server) works with
//! `anyhow::Result` and attaches context instead of matching on these types.

use std::path::PathBuf;

use thiserror::Error;

/// A transcript line could not be decoded into a record
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid JSON record: expected an object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Message content was neither a string nor a list of blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("message content must be a string or a list of blocks, found {found}")]
    UnsupportedShape { found: &'static str },
}

/// Failure to turn one transcript into messages
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read transcript {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported content on line {line}: {source}")]
    Content {
        line: usize,
        #[source]
        source: ContentError,
    },
}
