use once_cell::sync::Lazy;
use regex::Regex;

/// Fenced code: optional language tag on the opening fence, body up to the next fence
static CODE_FENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").expect("valid code fence pattern"));

static INLINE_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Replace every newline with an explicit HTML line break
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// First `limit` characters of `text`, and whether anything was cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

/// Truncate to `limit` characters, appending `marker` when anything was cut
pub fn truncate_with_marker(text: &str, limit: usize, marker: &str) -> (String, bool) {
    let (head, truncated) = truncate_chars(text, limit);
    if truncated { (format!("{}{}", head, marker), true) } else { (head.to_string(), false) }
}

/// Escape assistant text and apply the lightweight markdown subset used for display:
/// fenced code blocks, then inline code spans, then line breaks.
pub fn text_markup(text: &str) -> String {
    let escaped = escape_html(text);
    let fenced = CODE_FENCE_PATTERN.replace_all(&escaped, r#"<pre><code class="${1}">${2}</code></pre>"#);
    let inline = INLINE_CODE_PATTERN.replace_all(&fenced, "<code>${1}</code>");
    newlines_to_breaks(&inline)
}
