use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::SessionSummary;
use crate::parsers::parse_transcript_file;

use super::index::{IndexLinks, render_index_page};
use super::session::render_session_page;

/// File name of the generated index page
pub const INDEX_FILE_NAME: &str = "index.html";

/// Outcome of writing a static site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index_path: PathBuf,
    pub written: usize,
    pub failed: usize,
}

fn ensure_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))
}

/// Render one session and write it to `<output_dir>/<id>.html`
pub fn write_session_page(summary: &SessionSummary, output_dir: &Path) -> Result<PathBuf> {
    ensure_dir(output_dir)?;
    let transcript = parse_transcript_file(&summary.path)?;
    let page = render_session_page(&transcript, &summary.id, false);

    let path = output_dir.join(format!("{}.html", summary.id));
    fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Write a page per session plus an index linking to them
///
/// Sessions that fail to render are logged and left out of the count, but the
/// index still lists every session in `sessions`.
pub fn write_static_site(sessions: &[SessionSummary], output_dir: &Path) -> Result<SiteReport> {
    ensure_dir(output_dir)?;
    info!("Generating HTML for {} sessions", sessions.len());

    let mut written = 0;
    let mut failed = 0;
    for summary in sessions {
        match write_session_page(summary, output_dir) {
            Ok(_) => written += 1,
            Err(e) => {
                failed += 1;
                warn!("Error processing {}: {:#}", summary.id, e);
            }
        }
    }

    let index_path = output_dir.join(INDEX_FILE_NAME);
    let index = render_index_page(sessions, IndexLinks::Static { prefix: "" });
    fs::write(&index_path, index)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    Ok(SiteReport { index_path, written, failed })
}
