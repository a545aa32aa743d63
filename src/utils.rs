pub mod markdown;

pub use markdown::render_markdown;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` display columns, ending with "..." when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Simulate how text wraps with trimming (matching ratatui Wrap { trim: true } behavior)
/// Handles both explicit newlines (\n) and automatic wrapping at max_width
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let max_width = max_width.max(1);

    for ch in text.chars() {
        if ch == '\n' {
            lines.push(current_line.trim_end().to_string());
            current_line = String::new();
            current_width = 0;
        } else {
            let char_width = ch.width().unwrap_or(0);

            if current_width + char_width > max_width && current_width > 0 {
                lines.push(current_line.trim_end().to_string());
                current_line = ch.to_string();
                current_width = char_width;
            } else {
                current_line.push(ch);
                current_width += char_width;
            }
        }
    }

    if !current_line.is_empty() || text.ends_with('\n') {
        lines.push(current_line.trim_end().to_string());
    }

    lines
}

/// Rough number of rows `text` needs inside a box `width` columns wide.
pub fn estimate_text_height(text: &str, width: usize) -> usize {
    simulate_wrapped_lines(text, width).len()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}
