//! Session catalog for a Claude Code directory
//!
//! # Error Handling Strategy
//!
//! The indexer degrades gracefully, one transcript at a time:
//!
//! - **Discovery**: Only a projects path that exists but cannot be walked is an error.
//!   Unreadable entries inside it are logged with `warn!` and skipped.
//!
//! - **Transcript-level failures**: A transcript that cannot be read, or whose content
//!   violates the content contract, is logged with `warn!` and left out of the catalog.
//!   Other transcripts are unaffected.
//!
//! - **Empty transcripts**: Transcripts that yield no user or assistant messages are not
//!   cataloged.
//!
//! Line-level recovery happens earlier, inside the parsers.

pub mod catalog;
pub mod discovery;

pub use catalog::{
    PREVIEW_ELLIPSIS, PREVIEW_LIMIT, build_catalog, filter_by_project, find_session, sort_catalog,
    summarize, summarize_files,
};
pub use discovery::discover_transcripts;
