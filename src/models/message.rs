use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::error::ContentError;

/// Tool name used when a tool_use block carries none
pub const UNKNOWN_TOOL_NAME: &str = "Unknown";

/// Author of a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parse a role string; only `user` and `assistant` are rendered roles
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Content of a message: either one plain string or an ordered list of blocks
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One typed unit of message content.
///
/// Block lists in transcripts are loosely structured, so besides the four known
/// block types a list may hold bare strings (kept verbatim for plain-text
/// extraction) and blocks of types this viewer does not understand, e.g. images.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text { text: String },
    /// Internal reasoning, hidden by default when displayed
    Thinking { text: String },
    ToolUse { name: String, input: Map<String, Value> },
    ToolResult { content: Value },
    Bare(String),
    Unknown,
}

/// A normalized conversation message
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
    pub timestamp: Option<DateTime<Utc>>,
    pub id: String,
}

// Wire shape of a block. Kept private so that the public enum can carry the
// bare-string and unknown cases without serde attributes leaking into it.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    ToolUse {
        #[serde(default = "unknown_tool_name")]
        name: String,
        #[serde(default)]
        input: Map<String, Value>,
    },
    ToolResult {
        #[serde(default)]
        content: Value,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListItem {
    Bare(String),
    Block(TaggedBlock),
    Other(IgnoredAny),
}

fn unknown_tool_name() -> String {
    UNKNOWN_TOOL_NAME.to_string()
}

impl From<TaggedBlock> for ContentBlock {
    fn from(block: TaggedBlock) -> Self {
        match block {
            TaggedBlock::Text { text } => ContentBlock::Text { text },
            TaggedBlock::Thinking { thinking } => ContentBlock::Thinking { text: thinking },
            TaggedBlock::ToolUse { name, input } => ContentBlock::ToolUse { name, input },
            TaggedBlock::ToolResult { content } => ContentBlock::ToolResult { content },
            TaggedBlock::Unknown => ContentBlock::Unknown,
        }
    }
}

impl ContentBlock {
    /// Convert one item of a content list. Never fails: anything unrecognised
    /// becomes [`ContentBlock::Unknown`].
    pub fn from_item(item: Value) -> Self {
        match serde_json::from_value::<ListItem>(item) {
            Ok(ListItem::Bare(text)) => ContentBlock::Bare(text),
            Ok(ListItem::Block(block)) => block.into(),
            Ok(ListItem::Other(_)) | Err(_) => ContentBlock::Unknown,
        }
    }
}

impl MessageContent {
    /// Build content from the raw `message.content` value.
    ///
    /// Missing or `null` content is an empty string. Any shape other than a string
    /// or a list is a contract violation and is reported, not guessed at.
    pub fn from_value(value: Option<Value>) -> Result<Self, ContentError> {
        match value {
            None | Some(Value::Null) => Ok(MessageContent::Text(String::new())),
            Some(Value::String(text)) => Ok(MessageContent::Text(text)),
            Some(Value::Array(items)) => {
                Ok(MessageContent::Blocks(items.into_iter().map(ContentBlock::from_item).collect()))
            }
            Some(Value::Bool(_)) => Err(ContentError::UnsupportedShape { found: "boolean" }),
            Some(Value::Number(_)) => Err(ContentError::UnsupportedShape { found: "number" }),
            Some(Value::Object(_)) => Err(ContentError::UnsupportedShape { found: "object" }),
        }
    }
}

impl TryFrom<Value> for MessageContent {
    type Error = ContentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        MessageContent::from_value(Some(value))
    }
}
