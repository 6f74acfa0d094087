use serde_json::{Map, Value};

use super::text::truncate_chars;

/// Maximum characters of indented JSON shown for tools without a dedicated layout.
///
/// Note: no truncation marker is appended here, unlike thinking and tool results.
pub const TOOL_INPUT_LIMIT: usize = 500;

/// Tools with a dedicated one-line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Bash,
    Read,
    Write,
    Edit,
    /// Grep and Glob share a pattern + path layout
    Search,
    Task,
    Other,
}

impl ToolKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Bash" => ToolKind::Bash,
            "Read" => ToolKind::Read,
            "Write" => ToolKind::Write,
            "Edit" => ToolKind::Edit,
            "Grep" | "Glob" => ToolKind::Search,
            "Task" => ToolKind::Task,
            _ => ToolKind::Other,
        }
    }
}

/// Look up a string-ish input field. Missing and `null` use `default`;
/// non-string values are shown as compact JSON.
fn input_field(input: &Map<String, Value>, key: &str, default: &str) -> String {
    match input.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Serialize a tool input mapping as 2-space indented JSON, keeping key order
pub fn pretty_input(input: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(input).unwrap_or_default()
}

/// Tool-specific body text for a tool invocation
pub fn describe_tool_use(name: &str, input: &Map<String, Value>) -> String {
    match ToolKind::from_name(name) {
        ToolKind::Bash => {
            let command = input_field(input, "command", "");
            let description = input_field(input, "description", "");
            if description.is_empty() {
                format!("$ {}", command)
            } else {
                format!("# {}\n$ {}", description, command)
            }
        }
        ToolKind::Read => format!("Reading: {}", input_field(input, "file_path", "")),
        ToolKind::Write => format!("Writing to: {}", input_field(input, "file_path", "")),
        ToolKind::Edit => format!("Editing: {}", input_field(input, "file_path", "")),
        ToolKind::Search => format!(
            "Pattern: {}\nPath: {}",
            input_field(input, "pattern", ""),
            input_field(input, "path", ".")
        ),
        ToolKind::Task => format!(
            "Agent: {}\nTask: {}",
            input_field(input, "subagent_type", "unknown"),
            input_field(input, "description", "")
        ),
        ToolKind::Other => {
            let json = pretty_input(input);
            truncate_chars(&json, TOOL_INPUT_LIMIT).0.to_string()
        }
    }
}
