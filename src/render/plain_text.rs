use crate::models::{ContentBlock, MessageContent};

use super::tools::pretty_input;

/// Flatten message content into plain text for previews and search.
///
/// Strings are returned verbatim. For block lists each recognised block becomes
/// one fragment and fragments are joined with newlines; tool results and unknown
/// blocks contribute nothing.
pub fn extract_plain_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => {
            blocks.iter().filter_map(plain_fragment).collect::<Vec<_>>().join("\n")
        }
    }
}

fn plain_fragment(block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Text { text } => Some(text.clone()),
        ContentBlock::Thinking { text } => Some(format!("[THINKING]\n{}\n[/THINKING]", text)),
        ContentBlock::ToolUse { name, input } => {
            Some(format!("[TOOL: {}]\n{}\n[/TOOL]", name, pretty_input(input)))
        }
        ContentBlock::Bare(text) => Some(text.clone()),
        ContentBlock::ToolResult { .. } | ContentBlock::Unknown => None,
    }
}
