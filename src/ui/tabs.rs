use crate::app::App;
use crate::models::{Tab, VocabularyEntry};
use crate::ui::key_hints;
use crate::ui::layout::calculate_main_chunks;
use crate::utils::{calculate_max_scroll, estimate_text_height, truncate_string};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_main(f: &mut Frame, app: &App) {
    let layout = calculate_main_chunks(f.area());

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" عدمتك يا قلب - بشار بن برد "),
        );
    f.render_widget(tabs, layout.tabs_area);

    match app.tab {
        Tab::Poem => draw_poem_list(f, app, layout.body_area),
        _ => {
            let text = tab_text(app);
            draw_scrolling(f, text, app.scroll, layout.body_area, app.tab.title());
        }
    }

    let help = match app.tab {
        Tab::Poem => key_hints(&[
            ("←/→", "Tabs"),
            ("↑/↓", "Verse"),
            ("Enter", "Open"),
            ("z", "Quiz"),
            ("q", "Quit"),
        ]),
        Tab::Introduction | Tab::Poet => key_hints(&[
            ("←/→", "Tabs"),
            ("↑/↓", "Scroll"),
            ("Enter", "Card"),
            ("z", "Quiz"),
            ("q", "Quit"),
        ]),
        Tab::Glossary | Tab::Summary => key_hints(&[
            ("←/→", "Tabs"),
            ("↑/↓", "Scroll"),
            ("z", "Quiz"),
            ("q", "Quit"),
        ]),
    };
    let help = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn vocabulary_lines(entries: &[VocabularyEntry]) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|v| {
            Line::from(vec![
                Span::styled(
                    v.word.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::from(format!(": {}", v.definition)),
            ])
        })
        .collect()
}

fn tab_text(app: &App) -> Text<'static> {
    let content = &app.content;
    let mut text = Text::default();

    match app.tab {
        Tab::Introduction => {
            text.push_line(heading(&content.introduction.title));
            text.push_line(Line::from(""));
            text.push_line(Line::from(content.introduction.content.clone()));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                format!("\"{}\"", content.introduction.quote),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            text.push_line(Line::from(format!("- {}", content.introduction.quote_source)));
        }
        Tab::Poet => {
            text.push_line(heading(&content.poet.name));
            text.push_line(Line::from(""));
            text.push_line(Line::from(content.poet.bio.clone()));
        }
        Tab::Glossary => {
            for term in &content.glossary {
                text.push_line(Line::from(vec![
                    Span::styled(
                        term.term.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::from(format!(": {}", term.definition)),
                ]));
            }
        }
        Tab::Summary => {
            let summary = &content.summary;
            text.push_line(heading(&summary.title));
            text.push_line(Line::from(""));
            text.push_line(heading("الشاعر"));
            text.push_line(Line::from(summary.poet_summary.clone()));
            text.push_line(Line::from(""));
            text.push_line(heading("الفكرة العامة"));
            text.push_line(Line::from(summary.general_idea.clone()));
            text.push_line(Line::from(""));
            text.push_line(heading("الأفكار الجزئية"));
            for (i, idea) in summary.detailed_ideas.iter().enumerate() {
                text.push_line(Line::from(Span::styled(
                    format!("{}. {}", i + 1, idea.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                text.push_line(Line::from(format!("   {}", idea.content)));
            }
            text.push_line(Line::from(""));
            text.push_line(heading("الخصائص الفنية"));
            for feature in &summary.artistic_features {
                text.push_line(Line::from(vec![
                    Span::styled(
                        feature.feature.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::from(format!(": {}", feature.explanation)),
                ]));
            }
            text.push_line(Line::from(""));
            text.push_line(heading("المفردات"));
            for line in vocabulary_lines(&summary.vocabulary) {
                text.push_line(line);
            }
        }
        Tab::Poem => {}
    }

    text
}

pub(crate) fn draw_scrolling(f: &mut Frame, text: Text<'_>, scroll: u16, area: Rect, title: &str) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2) as usize;
    let content_height: usize = text
        .lines
        .iter()
        .map(|line| estimate_text_height(&line.to_string(), inner_width).max(1))
        .sum();
    let scroll = scroll.min(calculate_max_scroll(content_height, visible_height));

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Right)
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);
}

fn draw_poem_list(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let first = app.poem_cursor.saturating_sub(visible.saturating_sub(1));
    let max_width = area.width.saturating_sub(4) as usize;

    let lines: Vec<Line> = app
        .content
        .poem
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(i, verse)| {
            let text = truncate_string(
                &format!("{} ... {}  ({})", verse.part1, verse.part2, i + 1),
                max_width,
            );
            if i == app.poem_cursor {
                Line::from(Span::styled(
                    format!("> {}", text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", text))
            }
        })
        .collect();

    let list = Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Poem ({} verses)", app.content.poem.len())),
    );
    f.render_widget(list, area);
}
