use crate::render::text::escape_html;

/// Prefix of every document title
pub const TITLE_PREFIX: &str = "Claude Code Chat";

const STYLE: &str = r#"
:root {
    --bg: #15161e;
    --panel: #1d1f2b;
    --user: #1f3350;
    --assistant: #1d1f2b;
    --text: #e6e6e6;
    --muted: #9a9cab;
    --accent: #d97757;
    --border: #2c2f40;
    --code: #0f1016;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}
.container { max-width: 920px; margin: 0 auto; padding: 24px 20px; }
header { border-bottom: 1px solid var(--border); padding-bottom: 16px; margin-bottom: 24px; }
header h1 { font-size: 1.5rem; color: var(--accent); word-break: break-word; }
.meta { color: var(--muted); font-size: 0.85rem; display: flex; flex-wrap: wrap; gap: 14px; margin-top: 8px; }
.live-badge {
    background: #c0392b; color: #fff; font-size: 0.7rem; font-weight: 700;
    padding: 2px 8px; border-radius: 10px; letter-spacing: 0.05em;
}
.info-box {
    background: var(--panel); border: 1px solid var(--border); border-radius: 8px;
    padding: 10px 14px; margin-bottom: 18px; color: var(--muted); font-size: 0.85rem;
}
.back-link { color: var(--accent); text-decoration: none; display: inline-block; margin-bottom: 14px; }
.message { border: 1px solid var(--border); border-radius: 10px; margin-bottom: 16px; overflow: hidden; }
.message.user { background: var(--user); }
.message.assistant { background: var(--assistant); }
.message-header {
    display: flex; justify-content: space-between; padding: 8px 14px;
    font-weight: 600; font-size: 0.9rem; border-bottom: 1px solid var(--border);
}
.timestamp { color: var(--muted); font-weight: 400; font-size: 0.8rem; }
.message-content { padding: 12px 14px; word-wrap: break-word; }
.text-content { margin-bottom: 8px; }
pre { background: var(--code); border-radius: 6px; padding: 12px; overflow-x: auto; margin: 8px 0; }
code { font-family: 'SF Mono', Menlo, Consolas, monospace; font-size: 0.85em; }
:not(pre) > code { background: var(--code); padding: 1px 5px; border-radius: 4px; }
details.thinking { background: var(--panel); border: 1px dashed var(--border); border-radius: 8px; margin: 8px 0; }
details.thinking summary { cursor: pointer; padding: 6px 12px; color: var(--muted); }
details.thinking .thinking-content { padding: 8px 12px; white-space: pre-wrap; font-style: italic; color: var(--muted); }
.tool-call { background: var(--code); border-left: 3px solid var(--accent); border-radius: 6px; margin: 8px 0; }
.tool-call-header { padding: 6px 12px; font-size: 0.85rem; font-weight: 600; color: var(--accent); }
.tool-call-content {
    padding: 0 12px 10px; white-space: pre-wrap; font-family: 'SF Mono', Menlo, Consolas, monospace;
    font-size: 0.8rem; max-height: 400px; overflow-y: auto;
}
.search-box {
    width: 100%; padding: 10px 14px; border-radius: 8px; border: 1px solid var(--border);
    background: var(--panel); color: var(--text); font-size: 0.95rem; margin-bottom: 6px;
}
.search-stats { color: var(--muted); font-size: 0.8rem; min-height: 1.2em; margin-bottom: 12px; }
.session-list { list-style: none; }
.session-list li {
    background: var(--panel); border: 1px solid var(--border); border-radius: 8px;
    padding: 12px 16px; margin-bottom: 10px;
}
.session-list li.hidden { display: none; }
.session-list a { color: var(--text); font-weight: 600; text-decoration: none; }
.session-list a:hover { color: var(--accent); }
.session-meta { color: var(--muted); font-size: 0.8rem; display: flex; flex-wrap: wrap; gap: 12px; margin: 4px 0; }
.preview { color: var(--muted); font-size: 0.85rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
"#;

const SEARCH_SCRIPT: &str = r#"
(function () {
    const box = document.getElementById('searchBox');
    const list = document.getElementById('sessionList');
    const stats = document.getElementById('searchStats');
    if (!box || !list) { return; }
    const items = Array.from(list.querySelectorAll('li'));
    box.addEventListener('input', function () {
        const term = box.value.toLowerCase().trim();
        let visible = 0;
        items.forEach(function (item) {
            const haystack = [item.dataset.title, item.dataset.project, item.dataset.preview].join(' ');
            const show = term === '' || haystack.includes(term);
            item.classList.toggle('hidden', !show);
            if (show) { visible += 1; }
        });
        stats.textContent = term === '' ? '' : visible + ' of ' + items.length + ' sessions';
    });
})();
"#;

/// Script that reloads the page after `seconds`
pub fn refresh_script(seconds: u32) -> String {
    format!("<script>setTimeout(() => location.reload(), {});</script>", seconds * 1000)
}

/// Wrap a page body in the document shell.
///
/// `title` is escaped here; `meta` and `body` must already be markup.
pub fn render_document(title: &str, meta: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{prefix} - {title}</title>
<style>{style}</style>
</head>
<body>
<div class="container">
<header>
<h1>{title}</h1>
<div class="meta">{meta}</div>
</header>
<main>
{body}
</main>
</div>
<script>{script}</script>
</body>
</html>
"#,
        prefix = TITLE_PREFIX,
        title = escape_html(title),
        style = STYLE,
        meta = meta,
        body = body,
        script = SEARCH_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document_escapes_title() {
        let html = render_document("<b>x</b>", "", "");
        assert!(html.contains("<title>Claude Code Chat - &lt;b&gt;x&lt;/b&gt;</title>"));
        assert!(html.contains("<h1>&lt;b&gt;x&lt;/b&gt;</h1>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_document_keeps_body_markup() {
        let html = render_document("t", "<span>m</span>", "<p>body</p>");
        assert!(html.contains("<div class=\"meta\"><span>m</span></div>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_refresh_script() {
        assert_eq!(refresh_script(5), "<script>setTimeout(() => location.reload(), 5000);</script>");
    }
}
