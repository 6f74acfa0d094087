use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::indexer::discovery::discover_transcripts;
use crate::models::{SessionSummary, Transcript, TranscriptFile};
use crate::parsers::parse_transcript_file;
use crate::render::extract_plain_text;
use crate::render::text::truncate_chars;

/// Maximum characters of the first message kept as a preview
pub const PREVIEW_LIMIT: usize = 150;

/// Appended to previews that were cut
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Combine file-system metadata with transcript-derived fields
///
/// The preview is the plain text of the first message, cut to
/// [`PREVIEW_LIMIT`] characters with [`PREVIEW_ELLIPSIS`] appended when longer.
/// A transcript without messages gets an empty preview.
pub fn summarize(file: &TranscriptFile, transcript: &Transcript) -> SessionSummary {
    let preview = transcript
        .messages
        .first()
        .map(|message| {
            let text = extract_plain_text(&message.content);
            match truncate_chars(&text, PREVIEW_LIMIT) {
                (head, true) => format!("{}{}", head, PREVIEW_ELLIPSIS),
                (head, false) => head.to_string(),
            }
        })
        .unwrap_or_default();

    SessionSummary {
        id: file.id.clone(),
        project_path: file.project_path.clone(),
        path: file.path.clone(),
        modified: file.modified,
        size_bytes: file.size_bytes,
        message_count: transcript.messages.len(),
        preview,
        summary: transcript.metadata.summary.clone(),
    }
}

/// Order a catalog newest first. Equal modification times keep their input order.
pub fn sort_catalog(catalog: &mut [SessionSummary]) {
    // sort_by is stable
    catalog.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Summarize already-discovered transcript files
///
/// Transcripts are read and normalized in parallel. Results are collected in
/// input order before sorting, so ties resolve to discovery order.
/// Unreadable transcripts and transcripts with unsupported content are logged
/// and skipped; transcripts without any messages are dropped.
pub fn summarize_files(files: &[TranscriptFile]) -> Vec<SessionSummary> {
    let results: Vec<Option<SessionSummary>> = files
        .par_iter()
        .map(|file| match parse_transcript_file(&file.path) {
            Ok(transcript) if transcript.messages.is_empty() => None,
            Ok(transcript) => Some(summarize(file, &transcript)),
            Err(e) => {
                warn!("Skipping transcript {}: {}", file.id, e);
                None
            }
        })
        .collect();

    let mut catalog: Vec<SessionSummary> = results.into_iter().flatten().collect();
    sort_catalog(&mut catalog);
    catalog
}

/// Build the session catalog for a Claude directory
///
/// # Errors
///
/// Returns an error only if transcript discovery fails. Per-transcript
/// failures are logged and skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_chat_viewer::build_catalog;
///
/// let claude_dir = PathBuf::from("/Users/alice/.claude");
/// let catalog = build_catalog(&claude_dir)?;
/// println!("Found {} sessions", catalog.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_catalog(claude_dir: &Path) -> Result<Vec<SessionSummary>> {
    let files = discover_transcripts(claude_dir)?;
    let catalog = summarize_files(&files);
    info!("Cataloged {} sessions ({} transcript files found)", catalog.len(), files.len());
    Ok(catalog)
}

/// First summary, in catalog order, whose id contains `query`
pub fn find_session<'a>(catalog: &'a [SessionSummary], query: &str) -> Option<&'a SessionSummary> {
    catalog.iter().find(|summary| summary.id.contains(query))
}

/// Keep only summaries whose project path contains `needle`
pub fn filter_by_project(catalog: Vec<SessionSummary>, needle: &str) -> Vec<SessionSummary> {
    catalog.into_iter().filter(|summary| summary.project_path.contains(needle)).collect()
}
