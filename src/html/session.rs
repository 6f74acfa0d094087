use crate::models::{Message, Role, Transcript, session_title};
use crate::render::text::escape_html;
use crate::render::{Fragment, render_formatted};

use super::page::{refresh_script, render_document};
use super::timestamps::format_message_time;

/// Characters of the session id shown in titles and the meta line
pub const SESSION_ID_CHARS: usize = 8;

/// Seconds between reloads of a live session page
pub const SESSION_REFRESH_SECS: u32 = 5;

/// Markup for one formatted fragment
pub fn fragment_html(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Text { html } => format!(r#"<div class="text-content">{}</div>"#, html),
        Fragment::Thinking { text, .. } => format!(
            r#"<details class="thinking"><summary>Thinking</summary><div class="thinking-content">{}</div></details>"#,
            escape_html(text)
        ),
        Fragment::ToolUse { name, body } => tool_box(&format!("Tool: {}", name), body),
        Fragment::ToolResult { body, .. } => tool_box("Tool Result", body),
        Fragment::Empty => r#"<div class="text-content">(empty message)</div>"#.to_string(),
    }
}

fn tool_box(header: &str, body: &str) -> String {
    format!(
        r#"<div class="tool-call"><div class="tool-call-header">{}</div><div class="tool-call-content">{}</div></div>"#,
        escape_html(header),
        escape_html(body)
    )
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Claude",
    }
}

fn message_html(index: usize, message: &Message) -> String {
    let content: Vec<String> = render_formatted(&message.content).iter().map(fragment_html).collect();
    format!(
        r#"<div class="message {role}" id="msg-{index}">
<div class="message-header"><span>{label}</span><span class="timestamp">{time}</span></div>
<div class="message-content">
{content}
</div>
</div>"#,
        role = message.role.as_str(),
        index = index,
        label = role_label(message.role),
        time = format_message_time(message.timestamp.as_ref()),
        content = content.join("\n"),
    )
}

fn meta_html(transcript: &Transcript, live: bool) -> String {
    let metadata = &transcript.metadata;
    let mut parts = Vec::new();

    if !metadata.cwd.is_empty() {
        parts.push(format!("<span>{}</span>", escape_html(&metadata.cwd)));
    }
    if !metadata.session_id.is_empty() {
        let short: String = metadata.session_id.chars().take(SESSION_ID_CHARS).collect();
        parts.push(format!("<span>{}...</span>", escape_html(&short)));
    }
    if let Some(first) = transcript.messages.first() {
        let time = format_message_time(first.timestamp.as_ref());
        if !time.is_empty() {
            parts.push(format!("<span>{}</span>", time));
        }
    }
    parts.push(format!("<span>{} messages</span>", transcript.messages.len()));
    if live {
        parts.push(r#"<span class="live-badge">LIVE</span>"#.to_string());
    }

    parts.join(" ")
}

/// Full HTML page for one transcript
///
/// Live pages link back to the index, show a LIVE badge and reload every
/// [`SESSION_REFRESH_SECS`] seconds.
pub fn render_session_page(transcript: &Transcript, session_id: &str, live: bool) -> String {
    let mut body = Vec::with_capacity(transcript.messages.len() + 2);

    if live {
        body.push(format!(
            r#"<a href="/" class="back-link">&larr; Back to all sessions</a>
<div class="info-box"><span class="live-badge">LIVE</span> Auto-refreshes every {} seconds</div>"#,
            SESSION_REFRESH_SECS
        ));
    }
    body.extend(transcript.messages.iter().enumerate().map(|(i, m)| message_html(i, m)));
    if live {
        body.push(refresh_script(SESSION_REFRESH_SECS));
    }

    let title =
        session_title(transcript.metadata.summary.as_deref(), session_id, SESSION_ID_CHARS);
    render_document(&title, &meta_html(transcript, live), &body.join("\n"))
}
