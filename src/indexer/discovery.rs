use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::TranscriptFile;
use crate::utils::decode_project_dir;

/// Directory under the Claude dir holding one subdirectory per project
pub const PROJECTS_DIR_NAME: &str = "projects";

/// Extension of transcript files
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// File stems that share the transcript extension but are not transcripts
const NON_TRANSCRIPT_STEMS: &[&str] = &["sessions-index"];

/// Find every transcript under `<claude_dir>/projects/<project-dir>/*.jsonl`
///
/// Only files exactly one level below a project directory are considered.
/// Entries are yielded in file-name order so that discovery order is stable
/// across runs, which the catalog relies on for tie-breaking.
///
/// # Errors
///
/// Returns an error only if the projects directory exists but cannot be walked
/// at all. Individual entries that cannot be read are logged and skipped.
/// A missing projects directory is not an error and yields an empty list.
pub fn discover_transcripts(claude_dir: &Path) -> Result<Vec<TranscriptFile>> {
    let projects_dir = claude_dir.join(PROJECTS_DIR_NAME);
    if !projects_dir.exists() {
        debug!(path = %projects_dir.display(), "no projects directory");
        return Ok(Vec::new());
    }
    if !projects_dir.is_dir() {
        anyhow::bail!("Projects path is not a directory: {}", projects_dir.display());
    }

    let mut transcripts = Vec::new();
    let walker = WalkDir::new(&projects_dir)
        .min_depth(2)
        .max_depth(2)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", projects_dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(TRANSCRIPT_EXTENSION) {
            continue;
        }
        let Some(id) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()) else {
            continue;
        };
        if NON_TRANSCRIPT_STEMS.contains(&id.as_str()) {
            continue;
        }

        let project_dir_name = path
            .parent()
            .and_then(|parent| parent.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping transcript {}: {}", path.display(), e);
                continue;
            }
        };
        let modified = metadata
            .modified()
            .with_context(|| format!("Failed to read modification time: {}", path.display()));
        let modified = match modified {
            Ok(time) => DateTime::<Utc>::from(time),
            Err(e) => {
                warn!("Skipping transcript: {:#}", e);
                continue;
            }
        };

        transcripts.push(TranscriptFile {
            id,
            project_path: decode_project_dir(&project_dir_name),
            path: path.to_path_buf(),
            modified,
            size_bytes: metadata.len(),
        });
    }

    debug!(count = transcripts.len(), "discovered transcripts");
    Ok(transcripts)
}
