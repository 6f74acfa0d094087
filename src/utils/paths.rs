use std::path::Path;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters escaped in URL path text; `/` is kept so whole paths stay readable
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

// A single segment additionally escapes the separator
const SEGMENT_ENCODE_SET: &AsciiSet = &PATH_ENCODE_SET.add(b'/');

/// Decodes a Claude project directory name back to the project path.
///
/// Claude Code stores each project under a directory named after its path with
/// every `/` replaced by `-`. The reverse mapping is lossy: a `-` that was part
/// of a directory name also turns into `/`.
///
/// # Examples
///
/// ```
/// use claude_chat_viewer::decode_project_dir;
///
/// assert_eq!(decode_project_dir("-Users-foo-bar"), "/Users/foo/bar");
/// ```
pub fn decode_project_dir(name: &str) -> String {
    name.replace('-', "/")
}

/// Shortens a path to its last `max_parts` components, prefixed with `.../`
///
/// # Examples
///
/// ```
/// use claude_chat_viewer::utils::paths::shorten_path;
///
/// assert_eq!(shorten_path("/Users/foo/code/app", 2), ".../code/app");
/// assert_eq!(shorten_path("/code/app", 2), "/code/app");
/// ```
pub fn shorten_path(path: &str, max_parts: usize) -> String {
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    if parts.len() <= max_parts {
        return path.to_string();
    }
    format!(".../{}", parts[parts.len() - max_parts..].join("/"))
}

/// Displays `path` with the home directory abbreviated to `~`
pub fn format_path_with_tilde(path: &Path) -> String {
    tilde_relative_to(path, dirs::home_dir().as_deref())
}

/// [`format_path_with_tilde`] against an explicit home directory.
///
/// Matching is per path component, so `/home/dev2` is not abbreviated for a
/// home of `/home/dev`.
pub fn tilde_relative_to(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

/// Percent-encodes text for use as one URL path segment
///
/// # Examples
///
/// ```
/// use claude_chat_viewer::utils::paths::encode_url_segment;
///
/// assert_eq!(encode_url_segment("a#b?c"), "a%23b%3Fc");
/// ```
pub fn encode_url_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

/// `file://` URL of a local path
pub fn file_url(path: &Path) -> String {
    let text = path.to_string_lossy();
    let encoded = utf8_percent_encode(&text, PATH_ENCODE_SET);
    if text.starts_with('/') { format!("file://{}", encoded) } else { format!("file:///{}", encoded) }
}
