//! Terminal output sanitization
//!
//! Summaries and previews printed by `list` come straight from transcript files.
//! They are passed through [`sanitize_line`] so that embedded escape sequences
//! cannot move the cursor or recolor the terminal, and so that each entry stays
//! on one line.

/// Makes transcript text safe to print as a single terminal line.
///
/// - ANSI CSI sequences (`ESC [ ... letter`) are removed
/// - newlines, carriage returns and tabs become single spaces
/// - other control characters are dropped
///
/// # Examples
///
/// ```
/// use claude_chat_viewer::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mred\x1b[0m\nnext"), "red next");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        match ch {
            '\n' | '\r' | '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
