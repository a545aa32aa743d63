#[cfg(test)]
mod ui_integration_tests {
    use crate::app::App;
    use crate::config::AppConfig;
    use crate::content::PoemContent;
    use crate::models::{CardKind, Tab};
    use crate::ui;
    use crate::wheel::SPIN_ANIMATION;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn create_test_app() -> App {
        let content = PoemContent::embedded().unwrap();
        App::with_rng(content, &AppConfig::default(), StdRng::seed_from_u64(21)).unwrap()
    }

    /// Render one frame and return the screen as text, one row per line.
    fn render(app: &App, now: Instant) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw(f, app, now)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_main_view_shows_all_tabs() {
        let app = create_test_app();
        let screen = render(&app, Instant::now());
        for tab in Tab::ALL {
            assert!(screen.contains(tab.title()), "missing tab {}", tab.title());
        }
        assert!(screen.contains("Quit"));
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = create_test_app();
        let now = Instant::now();
        for tab in Tab::ALL {
            app.set_tab(tab);
            let screen = render(&app, now);
            assert!(!screen.trim().is_empty());
        }
        app.set_tab(Tab::Poem);
        assert!(render(&app, now).contains("Poem (23 verses)"));
    }

    #[test]
    fn test_scroll_past_end_is_clamped() {
        let mut app = create_test_app();
        app.set_tab(Tab::Summary);
        app.scroll = u16::MAX;
        let screen = render(&app, Instant::now());
        assert!(screen.contains("Summary"));
    }

    #[test]
    fn test_card_popup_renders() {
        let mut app = create_test_app();
        app.open_card(CardKind::Poet);
        let screen = render(&app, Instant::now());
        assert!(screen.contains("Close"));
    }

    #[test]
    fn test_verse_viewer_header() {
        let mut app = create_test_app();
        app.open_verse_viewer(4);
        let screen = render(&app, Instant::now());
        assert!(screen.contains("Verse 5 / 23"));
        assert!(screen.contains("Press e to show the explanation"));

        app.toggle_explanation();
        let screen = render(&app, Instant::now());
        assert!(!screen.contains("Press e to show the explanation"));
    }

    #[test]
    fn test_quiz_progress_and_feedback() {
        let now = Instant::now();
        let mut app = create_test_app();
        app.open_quiz();
        let screen = render(&app, now);
        assert!(screen.contains("Question 1 / 10 - Score 0"));
        assert!(screen.contains("[>]"));

        app.choose_option(0, now);
        let screen = render(&app, now);
        assert!(screen.contains("[x]"));

        app.tick(now + Duration::from_millis(1000));
        app.choose_option(2, now + Duration::from_millis(1000));
        let screen = render(&app, now);
        assert!(screen.contains("[✓]"));
        assert!(screen.contains("Score 1"));
    }

    #[test]
    fn test_quiz_completion_banner() {
        let mut now = Instant::now();
        let mut app = create_test_app();
        app.open_quiz();
        for _ in 0..app.quiz.bank_len() {
            let correct = app.quiz.current_question().correct_option.clone();
            app.quiz.select_answer(&correct, now);
            now += Duration::from_millis(1500);
            app.tick(now);
        }
        let screen = render(&app, now);
        assert!(screen.contains("Quiz complete - Score 10 / 10"));
        assert!(screen.contains("Well done!"));
    }

    #[test]
    fn test_wheel_renders_while_spinning_and_after() {
        let now = Instant::now();
        let mut app = create_test_app();
        app.open_wheel();
        let screen = render(&app, now);
        assert!(screen.contains("34 numbers left"));
        assert!(screen.contains("Selection wheel"));

        app.spin_wheel(now);
        let screen = render(&app, now + Duration::from_millis(2000));
        assert!(screen.contains("Spinning..."));

        let settled = now + SPIN_ANIMATION.duration;
        app.tick(settled);
        let screen = render(&app, settled);
        assert!(screen.contains("Drawn: "));
    }
}
