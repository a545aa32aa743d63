use crate::config::AppConfig;
use crate::content::PoemContent;
use crate::error::ContentError;
use crate::highlight::Highlighter;
use crate::models::{Card, CardKind, Overlay, Tab, Verse};
use crate::quiz::{QuizEngine, QuizEvent};
use crate::random::RngSource;
use crate::wheel::SelectionWheel;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

pub type WheelRng = RngSource<StdRng>;

/// Everything the terminal UI shows, plus the two game components.
#[derive(Debug)]
pub struct App {
    pub content: PoemContent,
    pub highlighter: Highlighter,
    pub tab: Tab,
    pub overlay: Overlay,
    pub poem_cursor: usize,
    pub verse_index: usize,
    pub explanation_visible: bool,
    pub scroll: u16,
    pub quiz: QuizEngine,
    pub quiz_cursor: usize,
    pub wheel: SelectionWheel<WheelRng>,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: PoemContent, config: &AppConfig) -> Result<Self, ContentError> {
        Self::with_rng(content, config, StdRng::from_entropy())
    }

    pub fn with_rng(
        content: PoemContent,
        config: &AppConfig,
        rng: StdRng,
    ) -> Result<Self, ContentError> {
        let highlighter = Highlighter::new(&content.glossary)?;
        let quiz = QuizEngine::new(content.questions.clone(), config.quiz)?;
        let wheel = SelectionWheel::new(config.wheel.clone(), RngSource(rng));

        Ok(Self {
            content,
            highlighter,
            tab: Tab::Introduction,
            overlay: Overlay::None,
            poem_cursor: 0,
            verse_index: 0,
            explanation_visible: false,
            scroll: 0,
            quiz,
            quiz_cursor: 0,
            wheel,
            should_quit: false,
        })
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn move_poem_cursor(&mut self, down: bool) {
        let last = self.content.poem.len().saturating_sub(1);
        self.poem_cursor = if down {
            (self.poem_cursor + 1).min(last)
        } else {
            self.poem_cursor.saturating_sub(1)
        };
    }

    pub fn open_card(&mut self, kind: CardKind) {
        self.overlay = Overlay::Card(kind);
        self.scroll = 0;
    }

    pub fn card(&self) -> Option<Card> {
        match self.overlay {
            Overlay::Card(CardKind::Introduction) => Some(self.content.introduction_card()),
            Overlay::Card(CardKind::Poet) => Some(self.content.poet_card()),
            _ => None,
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.scroll = 0;
    }

    pub fn open_verse_viewer(&mut self, index: usize) {
        if self.content.poem.is_empty() {
            return;
        }
        self.verse_index = index.min(self.content.poem.len() - 1);
        self.poem_cursor = self.verse_index;
        self.explanation_visible = false;
        self.scroll = 0;
        self.overlay = Overlay::VerseViewer;
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        self.content.poem.get(self.verse_index)
    }

    pub fn toggle_explanation(&mut self) {
        self.explanation_visible = !self.explanation_visible;
    }

    pub fn step_verse(&mut self, forward: bool) {
        let last = self.content.poem.len().saturating_sub(1);
        let next = if forward {
            (self.verse_index + 1).min(last)
        } else {
            self.verse_index.saturating_sub(1)
        };
        if next != self.verse_index {
            self.verse_index = next;
            self.poem_cursor = next;
            self.scroll = 0;
        }
    }

    pub fn open_quiz(&mut self) {
        if self.quiz.open() {
            self.quiz_cursor = 0;
        }
        self.overlay = Overlay::Quiz;
        tracing::debug!("quiz opened");
    }

    pub fn close_quiz(&mut self, now: Instant) {
        self.overlay = Overlay::None;
        self.quiz.close(now);
        tracing::debug!(score = self.quiz.score(), "quiz closed");
    }

    pub fn move_quiz_cursor(&mut self, down: bool) {
        let last = self.quiz.current_question().options.len().saturating_sub(1);
        self.quiz_cursor = if down {
            (self.quiz_cursor + 1).min(last)
        } else {
            self.quiz_cursor.saturating_sub(1)
        };
    }

    pub fn choose_option(&mut self, index: usize, now: Instant) {
        if self.quiz.finished() {
            return;
        }
        let Some(option) = self.quiz.current_question().options.get(index).cloned() else {
            return;
        };
        if self.quiz.selected().is_some() {
            return;
        }
        self.quiz_cursor = index;
        self.quiz.select_answer(&option, now);
    }

    pub fn open_wheel(&mut self) {
        self.overlay = Overlay::Wheel;
    }

    pub fn close_wheel(&mut self) {
        self.overlay = Overlay::Quiz;
    }

    pub fn spin_wheel(&mut self, now: Instant) {
        self.wheel.spin(now);
    }

    pub fn reset_wheel(&mut self) {
        self.wheel.reinitialize();
    }

    /// Open the verse matching the wheel's last number, if the poem has one.
    pub fn jump_to_drawn_verse(&mut self) -> bool {
        let Some(number) = self.wheel.last_drawn_number() else {
            return false;
        };
        let index = number as usize - 1;
        if index >= self.content.poem.len() {
            tracing::debug!(number, "drawn number has no matching verse");
            return false;
        }
        self.set_tab(Tab::Poem);
        self.open_verse_viewer(index);
        true
    }

    /// How long the event loop may block before something needs redrawing.
    pub fn poll_timeout(&self, now: Instant, frame: Duration) -> Duration {
        if self.wheel.spinning() {
            return frame;
        }
        self.quiz
            .next_due()
            .map(|due| due.saturating_duration_since(now).min(frame))
            .unwrap_or(frame)
    }

    /// Fire every deferred quiz and wheel effect due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for event in self.quiz.advance(now) {
            match event {
                QuizEvent::Advanced { .. } | QuizEvent::Reset => self.quiz_cursor = 0,
                QuizEvent::Celebrate { score, total } => {
                    tracing::info!(score, total, "celebration");
                }
                QuizEvent::RetryReady => {}
            }
        }
        if let Some(number) = self.wheel.advance(now) {
            tracing::debug!(number, "wheel result ready");
        }
    }
}
