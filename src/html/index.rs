use crate::models::SessionSummary;
use crate::render::text::escape_html;
use crate::utils::{encode_url_segment, shorten_path};

use super::page::{refresh_script, render_document};
use super::timestamps::{format_modified_time, format_relative};

/// Document title of the index page
pub const INDEX_TITLE: &str = "Claude Code Chat History";

/// Characters of the session id used when a session has no summary
pub const INDEX_ID_CHARS: usize = 12;

/// Trailing project path components shown per entry
pub const PROJECT_PATH_PARTS: usize = 2;

/// Seconds between reloads of the live index
pub const INDEX_REFRESH_SECS: u32 = 10;

/// How index entries link to session pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexLinks<'a> {
    /// `<prefix><id>.html`, for pages written side by side on disk
    Static { prefix: &'a str },
    /// `/session/<id>`, served by the live server
    Live,
}

impl IndexLinks<'_> {
    /// Link to a session page; the id is percent-encoded
    pub fn href(&self, session_id: &str) -> String {
        let id = encode_url_segment(session_id);
        match self {
            IndexLinks::Static { prefix } => format!("{}{}.html", prefix, id),
            IndexLinks::Live => format!("/session/{}", id),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, IndexLinks::Live)
    }
}

fn entry_html(index: usize, summary: &SessionSummary, links: IndexLinks<'_>) -> String {
    let title = summary.title(INDEX_ID_CHARS);
    let size_kb = summary.size_bytes as f64 / 1024.0;

    format!(
        r#"<li data-index="{index}" data-title="{title_lc}" data-project="{project_lc}" data-preview="{preview_lc}">
<a href="{href}">{title}</a>
<div class="session-meta">
<span class="session-time" title="{absolute}">{relative}</span>
<span class="session-path" title="{project}">{short_project}</span>
<span>{count} messages</span>
<span>{size_kb:.1}KB</span>
</div>
<div class="preview">{preview}</div>
</li>"#,
        index = index,
        title_lc = escape_html(&title.to_lowercase()),
        project_lc = escape_html(&summary.project_path.to_lowercase()),
        preview_lc = escape_html(&summary.preview.to_lowercase()),
        href = escape_html(&links.href(&summary.id)),
        title = escape_html(&title),
        absolute = format_modified_time(&summary.modified),
        relative = format_relative(&summary.modified),
        project = escape_html(&summary.project_path),
        short_project = escape_html(&shorten_path(&summary.project_path, PROJECT_PATH_PARTS)),
        count = summary.message_count,
        size_kb = size_kb,
        preview = escape_html(&summary.preview),
    )
}

/// Full HTML page listing every summary in the catalog, in catalog order
pub fn render_index_page(catalog: &[SessionSummary], links: IndexLinks<'_>) -> String {
    let items: Vec<String> =
        catalog.iter().enumerate().map(|(i, summary)| entry_html(i, summary, links)).collect();

    let mut body = String::new();
    if links.is_live() {
        body.push_str(&format!(
            r#"<div class="info-box"><span class="live-badge">LIVE</span> Auto-refreshes every {} seconds</div>"#,
            INDEX_REFRESH_SECS
        ));
        body.push_str(&refresh_script(INDEX_REFRESH_SECS));
    }
    body.push_str(
        r#"<input type="text" id="searchBox" class="search-box" placeholder="Search sessions by title, project, or content...">
<div class="search-stats" id="searchStats"></div>"#,
    );
    body.push_str(&format!(r#"<ul class="session-list" id="sessionList">{}</ul>"#, items.join("\n")));

    let mut meta = format!("<span id=\"totalSessions\">{} sessions found</span>", catalog.len());
    if links.is_live() {
        meta.push_str(r#" <span class="live-badge">LIVE</span>"#);
    }

    render_document(INDEX_TITLE, &meta, &body)
}
