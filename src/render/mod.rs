//! Content rendering for normalized messages.
//!
//! Two entry points share the same block traversal:
//!
//! - [`extract_plain_text`] flattens content for previews and search
//! - [`render_formatted`] produces display [`Fragment`]s with block-specific
//!   formatting and truncation
//!
//! Neither can fail: every optional field has a default, and content shapes the
//! model cannot represent are rejected earlier, when the message is normalized.
//!
//! Truncation limits are deliberately uneven. Thinking blocks and tool results
//! are cut at 1000 characters with a marker, while the JSON fallback for tools
//! without a dedicated layout is cut at 500 characters with no marker.

pub mod formatted;
pub mod plain_text;
pub mod text;
pub mod tools;

pub use formatted::{
    Fragment, THINKING_LIMIT, TOOL_RESULT_LIMIT, TRUNCATION_MARKER, render_formatted,
};
pub use plain_text::extract_plain_text;
pub use tools::{TOOL_INPUT_LIMIT, ToolKind, describe_tool_use};
