use crate::models::Card;
use crate::ui::key_hints;
use crate::ui::layout::{calculate_popup_chunks, centered_rect};
use crate::ui::tabs::draw_scrolling;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_card(f: &mut Frame, card: &Card, scroll: u16) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);
    let layout = calculate_popup_chunks(area);

    let title = Paragraph::new(card.title.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    for paragraph in card.content.split("\n\n") {
        text.push_line(Line::from(paragraph.to_string()));
        text.push_line(Line::from(""));
    }
    if let Some(source) = &card.source {
        text.push_line(Line::from(Span::styled(
            format!("المصدر: {}", source),
            Style::default().fg(Color::DarkGray),
        )));
    }
    draw_scrolling(f, text, scroll, layout.content_area, "");

    let help = Paragraph::new(key_hints(&[("↑/↓", "Scroll"), ("Esc", "Close")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
