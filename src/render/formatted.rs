use serde_json::Value;

use crate::models::{ContentBlock, MessageContent};

use super::text::{escape_html, newlines_to_breaks, text_markup, truncate_with_marker};
use super::tools::describe_tool_use;

/// Maximum characters of a thinking block shown before truncation
pub const THINKING_LIMIT: usize = 1000;

/// Maximum characters of a tool result shown before truncation
pub const TOOL_RESULT_LIMIT: usize = 1000;

/// Appended to thinking and tool-result bodies that were cut
pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// One renderable unit of display output.
///
/// `Text` carries finished markup. The other variants carry raw text and are
/// escaped by whatever presentation layer emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text { html: String },
    /// Collapsed by default; `text` is at most [`THINKING_LIMIT`] characters plus marker
    Thinking { text: String, truncated: bool },
    ToolUse { name: String, body: String },
    ToolResult { body: String, truncated: bool },
    /// Placeholder for content that produced nothing to show
    Empty,
}

impl Fragment {
    pub fn is_collapsed_by_default(&self) -> bool {
        matches!(self, Fragment::Thinking { .. })
    }
}

/// Render message content into display fragments.
///
/// Always returns at least one fragment: content that yields nothing is
/// represented by a single [`Fragment::Empty`].
pub fn render_formatted(content: &MessageContent) -> Vec<Fragment> {
    let fragments: Vec<Fragment> = match content {
        MessageContent::Text(text) => {
            vec![Fragment::Text { html: newlines_to_breaks(&escape_html(text)) }]
        }
        MessageContent::Blocks(blocks) => blocks.iter().filter_map(render_block).collect(),
    };

    if fragments.is_empty() { vec![Fragment::Empty] } else { fragments }
}

fn render_block(block: &ContentBlock) -> Option<Fragment> {
    match block {
        ContentBlock::Text { text } => Some(Fragment::Text { html: text_markup(text) }),
        ContentBlock::Thinking { text } => {
            let (text, truncated) = truncate_with_marker(text, THINKING_LIMIT, TRUNCATION_MARKER);
            Some(Fragment::Thinking { text, truncated })
        }
        ContentBlock::ToolUse { name, input } => {
            Some(Fragment::ToolUse { name: name.clone(), body: describe_tool_use(name, input) })
        }
        ContentBlock::ToolResult { content } => {
            let raw = stringify_result(content);
            let (body, truncated) = truncate_with_marker(&raw, TOOL_RESULT_LIMIT, TRUNCATION_MARKER);
            Some(Fragment::ToolResult { body, truncated })
        }
        ContentBlock::Bare(_) | ContentBlock::Unknown => None,
    }
}

/// String form of a tool result: strings as-is, `null` as empty, anything else as JSON
pub fn stringify_result(content: &Value) -> String {
    match content {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
