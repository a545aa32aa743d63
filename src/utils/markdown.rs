use lazy_static::lazy_static;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static! {
    static ref INLINE_RE: Regex = Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*|`([^`]+)`").unwrap();
    static ref NUMBERED_RE: Regex = Regex::new(r"^(\d+)\.\s+(.*)$").unwrap();
}

/// Render commentary text to ratatui lines.
/// Supports: **bold**, *italic*, `quoted phrase`, - / * / numbered lists.
/// Quoted phrases are emphasised rather than dimmed, since in verse commentary
/// they carry the words being discussed.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let mut result: Vec<Line<'static>> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
            let mut spans = vec![Span::from("  • ")];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if let Some(caps) = NUMBERED_RE.captures(trimmed)
            && let (Some(num), Some(item)) = (caps.get(1), caps.get(2))
        {
            let mut spans = vec![Span::from(format!("  {}. ", num.as_str()))];
            spans.extend(parse_inline(item.as_str()));
            result.push(Line::from(spans));
            continue;
        }

        if trimmed.is_empty() {
            result.push(Line::from(""));
        } else {
            result.push(Line::from(parse_inline(line)));
        }
    }

    result
}

/// Parse inline markup: **bold**, *italic*, `quoted`
pub fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::from(text[last..whole.start()].to_string()));
        }

        if let Some(bold) = caps.get(1) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(italic) = caps.get(2) {
            spans.push(Span::styled(
                italic.as_str().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        } else if let Some(quoted) = caps.get(3) {
            spans.push(Span::styled(
                quoted.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::from(text[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(span: &Span, modifier: Modifier) -> bool {
        span.style.add_modifier.contains(modifier)
    }

    #[test]
    fn test_plain_commentary_passes_through() {
        let lines = render_markdown("يخاطب الشاعر قلبه");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "يخاطب الشاعر قلبه");
        assert_eq!(lines[0].spans.len(), 1);
    }

    #[test]
    fn test_bold_and_italic_spans() {
        let lines = render_markdown("الغرض **الإنكار** مع *التعجب* هنا");
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[1].content, "الإنكار");
        assert!(has(&spans[1], Modifier::BOLD));
        assert_eq!(spans[3].content, "التعجب");
        assert!(has(&spans[3], Modifier::ITALIC));
        assert_eq!(spans[4].content, " هنا");
    }

    #[test]
    fn test_quoted_phrase_is_emphasised() {
        let lines = render_markdown("`كَرَبَتكَ كَربا`: مفعول مطلق");
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "كَرَبَتكَ كَربا");
        assert!(has(&spans[0], Modifier::BOLD | Modifier::UNDERLINED));
        assert_eq!(spans[1].content, ": مفعول مطلق");
    }

    #[test]
    fn test_bullets_and_numbered_items() {
        let lines = render_markdown("- طباق\n* جناس\n\n1. الاستفهام\n12. النداء");
        assert_eq!(lines.len(), 5);
        assert!(lines[0].to_string().starts_with("  • "));
        assert!(lines[1].to_string().ends_with("جناس"));
        assert_eq!(lines[2].to_string(), "");
        assert_eq!(lines[3].to_string(), "  1. الاستفهام");
        assert_eq!(lines[4].to_string(), "  12. النداء");
    }

    #[test]
    fn test_unclosed_marker_is_left_alone() {
        let spans = parse_inline("**غير مغلق");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "**غير مغلق");
    }
}
