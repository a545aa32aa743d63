mod card;
pub mod layout;
mod quiz;
mod tabs;
mod verse;
mod wheel;

pub use card::draw_card;
pub use layout::{calculate_main_chunks, calculate_popup_chunks, centered_rect};
pub use quiz::draw_quiz;
pub use tabs::draw_main;
pub use verse::draw_verse_viewer;
pub use wheel::draw_wheel;

use crate::app::App;
use crate::models::Overlay;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use std::time::Instant;

/// Draw the tab view and whichever popup is open on top of it.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    draw_main(f, app);
    match app.overlay {
        Overlay::None => {}
        Overlay::Card(_) => {
            if let Some(card) = app.card() {
                draw_card(f, &card, app.scroll);
            }
        }
        Overlay::VerseViewer => draw_verse_viewer(f, app),
        Overlay::Quiz => draw_quiz(f, &app.quiz, app.quiz_cursor),
        Overlay::Wheel => draw_wheel(f, &app.wheel, app.content.poem.len(), now),
    }
}

/// `key description` pairs styled the same way on every screen.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, description) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", description)));
    }
    Line::from(spans)
}
