//! Live HTTP server
//!
//! Every request rebuilds the catalog and re-renders from disk, so pages always
//! reflect the current transcripts. Catalog building and rendering are blocking
//! and run on tokio's blocking pool.
//!
//! ## Routes
//!
//! - `GET /`, `GET /index.html` - session index
//! - `GET /session/{id}` - session page; `id` may be a partial id and may end in `.html`
//! - `GET /favicon.ico` - empty 204
//! - anything else - 404

use std::net::SocketAddr;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::{error, info};

use crate::html::{IndexLinks, render_index_page, render_session_page};
use crate::indexer::{build_catalog, find_session};
use crate::parsers::parse_transcript_file;
use crate::utils::{open_in_browser, server_url};

/// Value of the `Cache-Control` header on every page
pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

#[derive(Clone)]
pub struct AppState {
    pub claude_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(claude_dir: PathBuf) -> Self {
        Self { claude_dir: Arc::new(claude_dir) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/session/{id}", get(session))
        .route("/favicon.ico", get(favicon))
        .fallback(not_found)
        .with_state(state)
}

/// Serve the live viewer on `127.0.0.1:<port>` until Ctrl+C, optionally opening
/// the index in a browser once the port is bound
pub async fn serve(claude_dir: PathBuf, port: u16, open_browser: bool) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let url = server_url(port);
    info!("Live viewer running at {}", url);
    info!("Session list refreshes every 10 seconds, sessions every 5 seconds");
    if open_browser {
        open_in_browser(&url);
    }

    axum::serve(listener, build_router(AppState::new(claude_dir)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Strip the optional `.html` suffix from a session path segment
pub fn session_query(segment: &str) -> &str {
    segment.strip_suffix(".html").unwrap_or(segment)
}

fn html_page(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8"), (header::CACHE_CONTROL, NO_CACHE)],
        body,
    )
        .into_response()
}

fn plain_status(status: StatusCode, message: String) -> Response {
    (status, [(header::CACHE_CONTROL, NO_CACHE)], message).into_response()
}

fn internal_error(e: anyhow::Error) -> Response {
    error!("Request failed: {:#}", e);
    plain_status(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
}

/// Run blocking page work off the async runtime
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.context("Rendering task failed")?
}

fn live_index_page(claude_dir: &FsPath) -> Result<String> {
    let catalog = build_catalog(claude_dir)?;
    Ok(render_index_page(&catalog, IndexLinks::Live))
}

/// Rendered live page for the first session matching `query`, or `None`
fn live_session_page(claude_dir: &FsPath, query: &str) -> Result<Option<String>> {
    let catalog = build_catalog(claude_dir)?;
    let Some(summary) = find_session(&catalog, query) else {
        return Ok(None);
    };
    let transcript = parse_transcript_file(&summary.path)?;
    Ok(Some(render_session_page(&transcript, &summary.id, true)))
}

async fn index(State(state): State<AppState>) -> Response {
    let claude_dir = Arc::clone(&state.claude_dir);
    match run_blocking(move || live_index_page(&claude_dir)).await {
        Ok(page) => html_page(page),
        Err(e) => internal_error(e),
    }
}

async fn session(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let query = session_query(&segment).to_string();
    let claude_dir = Arc::clone(&state.claude_dir);
    let lookup = query.clone();

    match run_blocking(move || live_session_page(&claude_dir, &lookup)).await {
        Ok(Some(page)) => html_page(page),
        Ok(None) => plain_status(StatusCode::NOT_FOUND, format!("Session {} not found", query)),
        Err(e) => internal_error(e),
    }
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found() -> Response {
    plain_status(StatusCode::NOT_FOUND, "Not found".to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use super::*;

    const USER_LINE: &str = r#"{"type":"user","sessionId":"s","message":{"role":"user","content":"hello <server>"}}"#;

    fn claude_dir_with_session(id: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("projects").join("-home-dev-app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(format!("{}.jsonl", id)), USER_LINE).unwrap();
        dir
    }

    async fn start(claude_dir: &FsPath) -> SocketAddr {
        let app = build_router(AppState::new(claude_dir.to_path_buf()));
        let listener =
            tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }

    async fn get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request =
            format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[test]
    fn test_session_query_strips_html_suffix() {
        assert_eq!(session_query("abc.html"), "abc");
        assert_eq!(session_query("abc"), "abc");
        assert_eq!(session_query("a.html.html"), "a.html");
    }

    #[tokio::test]
    async fn test_index_lists_sessions_with_live_links() {
        let dir = claude_dir_with_session("abc123");
        let addr = start(dir.path()).await;

        let response = get(addr, "/").await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.to_lowercase().contains("cache-control: no-cache, no-store, must-revalidate"));
        assert!(response.contains(r#"href="/session/abc123""#));
        assert!(response.contains("LIVE"));

        let response = get(addr, "/index.html").await;
        assert!(response.starts_with("HTTP/1.1 200"));
    }

    #[tokio::test]
    async fn test_session_page_partial_id_and_suffix() {
        let dir = claude_dir_with_session("abc123");
        let addr = start(dir.path()).await;

        let response = get(addr, "/session/abc.html").await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("hello &lt;server&gt;"));
        assert!(response.contains("location.reload(), 5000"));
    }

    #[tokio::test]
    async fn test_session_page_not_found() {
        let dir = claude_dir_with_session("abc123");
        let addr = start(dir.path()).await;

        let response = get(addr, "/session/zzz").await;
        assert!(response.starts_with("HTTP/1.1 404"));
        assert!(response.contains("Session zzz not found"));
    }

    #[tokio::test]
    async fn test_favicon_and_unknown_routes() {
        let dir = claude_dir_with_session("abc123");
        let addr = start(dir.path()).await;

        assert!(get(addr, "/favicon.ico").await.starts_with("HTTP/1.1 204"));
        assert!(get(addr, "/nope").await.starts_with("HTTP/1.1 404"));
    }

    #[tokio::test]
    async fn test_pages_reflect_disk_changes() {
        let dir = claude_dir_with_session("first");
        let addr = start(dir.path()).await;
        assert!(!get(addr, "/").await.contains("/session/second"));

        let project = dir.path().join("projects").join("-home-dev-app");
        fs::write(project.join("second.jsonl"), USER_LINE).unwrap();
        assert!(get(addr, "/").await.contains("/session/second"));
    }

    #[tokio::test]
    async fn test_index_link_for_id_with_url_characters() {
        let dir = claude_dir_with_session("odd#id?50%");
        let addr = start(dir.path()).await;

        let index = get(addr, "/").await;
        assert!(index.contains(r#"href="/session/odd%23id%3F50%25""#));

        let response = get(addr, "/session/odd%23id%3F50%25").await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("hello &lt;server&gt;"));
    }
}
