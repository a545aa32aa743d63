use crate::quiz::{OptionStatus, QuizEngine};
use crate::ui::key_hints;
use crate::ui::layout::{calculate_popup_chunks, centered_rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn option_style(status: OptionStatus, under_cursor: bool) -> Style {
    let style = match status {
        OptionStatus::Unselected => Style::default(),
        OptionStatus::SelectedCorrect => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionStatus::SelectedIncorrect => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        OptionStatus::Dimmed => Style::default().fg(Color::DarkGray),
    };
    if under_cursor && status == OptionStatus::Unselected {
        style.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn draw_quiz(f: &mut Frame, quiz: &QuizEngine, cursor: usize) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    let layout = calculate_popup_chunks(area);

    let progress = if quiz.finished() {
        format!("Quiz complete - Score {} / {}", quiz.score(), quiz.bank_len())
    } else {
        format!(
            "Question {} / {} - Score {}",
            quiz.current_index() + 1,
            quiz.bank_len(),
            quiz.score()
        )
    };
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut text = Text::default();
    if quiz.finished() {
        let banner = if quiz.celebrating() {
            "*  .  *  Well done!  *  .  *"
        } else {
            "Well done!"
        };
        text.push_line(Line::from(Span::styled(
            banner,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(format!(
            "You answered all {} questions. Score: {} / {}",
            quiz.bank_len(),
            quiz.score(),
            quiz.bank_len()
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from("Press w to spin the selection wheel."));
        text = text.alignment(Alignment::Center);
    } else {
        let question = quiz.current_question();
        text.push_line(
            Line::from(Span::styled(
                question.prompt.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );
        text.push_line(Line::from(""));
        for (i, option) in question.options.iter().enumerate() {
            let status = quiz.option_status(option);
            let marker = match status {
                OptionStatus::SelectedCorrect => "[✓]",
                OptionStatus::SelectedIncorrect => "[x]",
                _ if i == cursor => "[>]",
                _ => "[ ]",
            };
            text.push_line(
                Line::from(Span::styled(
                    format!("{} {}  {}", option, marker, i + 1),
                    option_style(status, i == cursor),
                ))
                .alignment(Alignment::Right),
            );
            text.push_line(Line::from(""));
        }
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    f.render_widget(body, layout.content_area);

    let help = Paragraph::new(key_hints(&[
        ("↑/↓", "Move"),
        ("Enter/1-4", "Answer"),
        ("w", "Wheel"),
        ("Esc", "Close"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
