use crate::app::App;
use crate::highlight::Fragment;
use crate::ui::key_hints;
use crate::ui::layout::{calculate_popup_chunks, centered_rect};
use crate::ui::tabs::draw_scrolling;
use crate::utils::render_markdown;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn highlighted_line(app: &App, hemistich: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = app
        .highlighter
        .split(hemistich)
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => Span::from(text.to_string()),
            Fragment::Term { word, .. } => Span::styled(
                word.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

fn section(text: &mut Text<'static>, title: &str, body: &str) {
    text.push_line(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.extend(render_markdown(body));
    text.push_line(Line::from(""));
}

pub fn draw_verse_viewer(f: &mut Frame, app: &App) {
    let Some(verse) = app.current_verse() else {
        return;
    };

    let area = centered_rect(85, 85, f.area());
    f.render_widget(Clear, area);
    let layout = calculate_popup_chunks(area);

    let header = Paragraph::new(format!(
        "Verse {} / {}",
        app.verse_index + 1,
        app.content.poem.len()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut text = Text::default();
    text.push_line(highlighted_line(app, &verse.part1));
    text.push_line(highlighted_line(app, &verse.part2));
    text.push_line(Line::from(""));

    let mut terms = app.highlighter.terms_in(&verse.part1);
    for term in app.highlighter.terms_in(&verse.part2) {
        if !terms.iter().any(|t| t.term == term.term) {
            terms.push(term);
        }
    }
    for term in terms {
        text.push_line(Line::from(vec![
            Span::styled(
                term.term.clone(),
                Style::default().fg(Color::Yellow),
            ),
            Span::from(format!(": {}", term.definition)),
        ]));
    }
    text.push_line(Line::from(""));

    if app.explanation_visible {
        let explanation = &verse.explanation;
        section(&mut text, "المعنى", &explanation.meaning);
        if let Some(imagery) = &explanation.imagery {
            section(&mut text, "الصورة الفنية", imagery);
        }
        if let Some(rhetoric) = &explanation.rhetoric {
            section(&mut text, "الأساليب البلاغية", rhetoric);
        }
        if !explanation.vocabulary.is_empty() {
            let vocabulary = explanation
                .vocabulary
                .iter()
                .map(|v| format!("- **{}**: {}", v.word, v.definition))
                .collect::<Vec<_>>()
                .join("\n");
            section(&mut text, "المفردات", &vocabulary);
        }
    } else {
        text.push_line(Line::from(Span::styled(
            "Press e to show the explanation",
            Style::default().fg(Color::DarkGray),
        )));
    }

    draw_scrolling(f, text, app.scroll, layout.content_area, "");

    let help = Paragraph::new(key_hints(&[
        ("↑/↓", "Verse"),
        ("e", "Explanation"),
        ("PgUp/PgDn", "Scroll"),
        ("Esc", "Close"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
