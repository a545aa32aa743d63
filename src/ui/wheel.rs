use crate::random::RandomSource;
use crate::ui::key_hints;
use crate::ui::layout::{calculate_popup_chunks, centered_rect};
use crate::wheel::{Point, SelectionWheel};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use std::time::Instant;

fn palette_color(hex: Option<&str>) -> Color {
    hex.and_then(|h| h.parse::<Color>().ok())
        .unwrap_or(Color::Yellow)
}

fn status_line<R: RandomSource>(wheel: &SelectionWheel<R>, verse_count: usize) -> String {
    if wheel.spinning() {
        return "Spinning...".to_string();
    }
    let status = match wheel.last_drawn_number() {
        Some(number) if number as usize <= verse_count => {
            format!("Drawn: {}  (g opens verse {})", number, number)
        }
        Some(number) => format!("Drawn: {}", number),
        None => format!("{} numbers left", wheel.active_count()),
    };
    if wheel.all_segments_inactive() {
        format!("{}. Every number has been drawn, press r to start over", status)
    } else {
        status
    }
}

pub fn draw_wheel<R: RandomSource>(
    f: &mut Frame,
    wheel: &SelectionWheel<R>,
    verse_count: usize,
    now: Instant,
) {
    let area = centered_rect(80, 90, f.area());
    f.render_widget(Clear, area);
    let layout = calculate_popup_chunks(area);

    let header = Paragraph::new(status_line(wheel, verse_count))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let config = wheel.config();
    let center = config.center;
    let radius = config.radius;
    let extent = center * 2.0;
    let rotation = wheel.displayed_rotation(now);
    // Canvas y grows upward, wheel geometry is in screen coordinates.
    let flip = |p: Point| (p.x, extent - p.y);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Selection wheel"))
        .marker(Marker::Braille)
        .x_bounds([0.0, extent])
        .y_bounds([0.0, extent])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: center,
                y: center,
                radius,
                color: Color::Yellow,
            });

            for segment in wheel.segments() {
                let (x, y) = flip(Point::on_circle(
                    center,
                    radius,
                    segment.start_degrees + rotation,
                ));
                ctx.draw(&CanvasLine {
                    x1: center,
                    y1: center,
                    x2: x,
                    y2: y,
                    color: Color::DarkGray,
                });
            }

            ctx.layer();
            for segment in wheel.segments() {
                let (x, y) = flip(Point::on_circle(
                    center,
                    radius * 0.75,
                    segment.mid_degrees() + rotation,
                ));
                let style = if !segment.active {
                    if wheel.last_drawn_number() == Some(segment.number) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    }
                } else {
                    Style::default().fg(palette_color(wheel.color_of(segment)))
                };
                ctx.print(x, y, Span::styled(segment.number.to_string(), style));
            }

            // Fixed pointer at 12 o'clock.
            let tip = center + radius - 12.0;
            let base = (center + radius + 8.0).min(extent);
            ctx.draw(&CanvasLine {
                x1: center - 8.0,
                y1: base,
                x2: center,
                y2: tip,
                color: Color::Red,
            });
            ctx.draw(&CanvasLine {
                x1: center + 8.0,
                y1: base,
                x2: center,
                y2: tip,
                color: Color::Red,
            });
        });
    f.render_widget(canvas, layout.content_area);

    let help = Paragraph::new(key_hints(&[
        ("Space", "Spin"),
        ("g", "Go to verse"),
        ("r", "Reset"),
        ("Esc", "Back to quiz"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
