use crate::app::App;
use crate::models::{CardKind, Overlay, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.overlay {
        Overlay::None => handle_main_input(app, key),
        Overlay::Card(_) => handle_card_input(app, key),
        Overlay::VerseViewer => handle_verse_input(app, key),
        Overlay::Quiz => handle_quiz_input(app, key, now),
        Overlay::Wheel => handle_wheel_input(app, key, now),
    }
}

fn handle_main_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Right | KeyCode::Tab => app.set_tab(app.tab.next()),
        KeyCode::Left | KeyCode::BackTab => app.set_tab(app.tab.previous()),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.set_tab(Tab::ALL[index]);
        }
        KeyCode::Char('z') => app.open_quiz(),
        KeyCode::Up => {
            if app.tab == Tab::Poem {
                app.move_poem_cursor(false);
            } else {
                app.scroll_up();
            }
        }
        KeyCode::Down => {
            if app.tab == Tab::Poem {
                app.move_poem_cursor(true);
            } else {
                app.scroll_down();
            }
        }
        KeyCode::Enter => match app.tab {
            Tab::Poem => app.open_verse_viewer(app.poem_cursor),
            Tab::Introduction => app.open_card(CardKind::Introduction),
            Tab::Poet => app.open_card(CardKind::Poet),
            Tab::Glossary | Tab::Summary => {}
        },
        _ => {}
    }
}

fn handle_card_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.close_overlay(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

fn handle_verse_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Char('e') | KeyCode::Char(' ') => app.toggle_explanation(),
        KeyCode::Up | KeyCode::Left => app.step_verse(false),
        KeyCode::Down | KeyCode::Right => app.step_verse(true),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::PageUp => app.scroll_up(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.close_quiz(now),
        KeyCode::Char('w') => app.open_wheel(),
        KeyCode::Up => app.move_quiz_cursor(false),
        KeyCode::Down => app.move_quiz_cursor(true),
        KeyCode::Enter => app.choose_option(app.quiz_cursor, now),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.choose_option(index, now);
        }
        _ => {}
    }
}

fn handle_wheel_input(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.close_wheel(),
        KeyCode::Char(' ') | KeyCode::Enter => app.spin_wheel(now),
        KeyCode::Char('r') => app.reset_wheel(),
        KeyCode::Char('g') => {
            app.jump_to_drawn_verse();
        }
        _ => {}
    }
}
