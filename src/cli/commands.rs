use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::html::{write_session_page, write_static_site};
use crate::indexer::{build_catalog, filter_by_project, find_session};
use crate::models::SessionSummary;
use crate::server;
use crate::utils::{file_url, format_path_with_tilde, open_in_browser, sanitize_line};

/// Characters of the preview shown per `list` entry
pub const LIST_PREVIEW_CHARS: usize = 60;

/// Characters of the session id shown per `list` entry
pub const LIST_ID_CHARS: usize = 8;

pub fn apply_overrides(
    mut config: Config,
    output: Option<PathBuf>,
    limit: Option<usize>,
    port: Option<u16>,
) -> Config {
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(limit) = limit {
        config.limit = limit;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

fn load_catalog(config: &Config, project: Option<&str>) -> Result<Vec<SessionSummary>> {
    let catalog = build_catalog(&config.claude_dir)?;
    Ok(match project {
        Some(needle) => filter_by_project(catalog, needle),
        None => catalog,
    })
}

/// Write pages for the newest sessions plus the index
pub fn generate(config: &Config, project: Option<&str>, open: bool) -> Result<()> {
    let mut catalog = load_catalog(config, project)?;
    catalog.truncate(config.limit);

    let report = write_static_site(&catalog, &config.output_dir)?;

    println!("Generated {} session files", report.written);
    if report.failed > 0 {
        println!("Failed: {}", report.failed);
    }
    println!("Output directory: {}", format_path_with_tilde(&config.output_dir));
    println!("Index: {}", report.index_path.display());
    if open {
        open_in_browser(&file_url(&report.index_path));
    }
    Ok(())
}

/// Write the page of the first session whose id contains `query`
pub fn session(config: &Config, query: &str, open: bool) -> Result<()> {
    let catalog = build_catalog(&config.claude_dir)?;
    let Some(summary) = find_session(&catalog, query) else {
        bail!("No session found matching: {} (use `list` to see available sessions)", query);
    };

    let path = write_session_page(summary, &config.output_dir)
        .with_context(|| format!("Failed to generate session {}", summary.id))?;
    println!("Generated: {}", path.display());
    if open {
        open_in_browser(&file_url(&path));
    }
    Ok(())
}

/// Print the newest sessions to stdout
pub fn list(config: &Config, project: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config, project)?;
    print!("{}", format_listing(&catalog, config.limit));
    Ok(())
}

/// Terminal listing of up to `limit` sessions, followed by the total count
pub fn format_listing(catalog: &[SessionSummary], limit: usize) -> String {
    let mut out = String::from("Claude Code Chat Sessions\n=========================\n\n");

    for (i, summary) in catalog.iter().take(limit).enumerate() {
        let short_id: String = summary.id.chars().take(LIST_ID_CHARS).collect();
        let modified = crate::html::timestamps::format_modified_time(&summary.modified);
        let preview: String = sanitize_line(&summary.preview).chars().take(LIST_PREVIEW_CHARS).collect();

        out.push_str(&format!("{:3}. [{}] {}\n", i + 1, short_id, modified));
        out.push_str(&format!("     Project: {}\n", sanitize_line(&summary.project_path)));
        out.push_str(&format!(
            "     {} messages | {:.1} KB\n",
            summary.message_count,
            summary.size_bytes as f64 / 1024.0
        ));
        if let Some(title) = &summary.summary {
            out.push_str(&format!("     Summary: {}\n", sanitize_line(title)));
        }
        out.push_str(&format!("     Preview: {}...\n\n", preview));
    }

    out.push_str(&format!("Total: {} sessions\n", catalog.len()));
    out
}

/// Run the live server until interrupted
pub fn serve(config: &Config, open_browser: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::serve(config.claude_dir.clone(), config.port, open_browser))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn summary(id: &str, title: Option<&str>, preview: &str) -> SessionSummary {
        SessionSummary {
            id: id.to_string(),
            project_path: "/home/dev/app".to_string(),
            path: PathBuf::from("/tmp/x.jsonl"),
            modified: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
            size_bytes: 1536,
            message_count: 4,
            preview: preview.to_string(),
            summary: title.map(str::to_string),
        }
    }

    #[test]
    fn test_apply_overrides() {
        let base = Config::with_home(Path::new("/home/dev"));
        let config = apply_overrides(base.clone(), Some(PathBuf::from("/out")), Some(3), Some(9000));
        assert_eq!(config.output_dir, PathBuf::from("/out"));
        assert_eq!(config.limit, 3);
        assert_eq!(config.port, 9000);

        assert_eq!(apply_overrides(base.clone(), None, None, None), base);
    }

    #[test]
    fn test_format_listing_entry() {
        let catalog = vec![summary("0123456789abcdef", Some("Parser work"), "line one\nline two")];
        let listing = format_listing(&catalog, 50);

        assert!(listing.contains("  1. [01234567] "));
        assert!(listing.contains("     Project: /home/dev/app\n"));
        assert!(listing.contains("     4 messages | 1.5 KB\n"));
        assert!(listing.contains("     Summary: Parser work\n"));
        assert!(listing.contains("     Preview: line one line two...\n"));
        assert!(listing.ends_with("Total: 1 sessions\n"));
    }

    #[test]
    fn test_format_listing_respects_limit_and_counts_all() {
        let catalog = vec![summary("a", None, "x"), summary("b", None, "y"), summary("c", None, "z")];
        let listing = format_listing(&catalog, 2);

        assert!(listing.contains("  2. [b]"));
        assert!(!listing.contains("  3. [c]"));
        assert!(!listing.contains("Summary:"));
        assert!(listing.contains("Total: 3 sessions"));
    }

    #[test]
    fn test_format_listing_preview_truncated_and_sanitized() {
        let long = format!("\x1b[31m{}", "p".repeat(100));
        let listing = format_listing(&[summary("a", None, &long)], 10);
        let expected = format!("     Preview: {}...\n", "p".repeat(LIST_PREVIEW_CHARS));
        assert!(listing.contains(&expected));
        assert!(!listing.contains('\x1b'));
    }
}
