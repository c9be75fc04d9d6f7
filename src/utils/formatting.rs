//! Formatting utilities used for the text reports.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a column of `width` terminal cells.
///
/// Counts display width rather than bytes, so comments with accents or
/// emoji keep the following columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `125` → `"2h 5m"`. Negative input renders as zero.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h {}m", m / 60, m % 60)
}

/// Wrap a text block in a fenced code block for chat clients that render
/// markdown in a monospace font.
pub fn code_block(text: &str) -> String {
    format!("```\n{}\n```\n", text.trim_end_matches('\n'))
}
