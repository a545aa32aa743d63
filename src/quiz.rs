use crate::config::QuizTimings;
use crate::error::ContentError;
use crate::models::Question;
use crate::timer::Scheduler;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizEffect {
    Advance,
    ClearSelection,
    Reset,
}

/// Observable outcomes of deferred effects, returned from [`QuizEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Advanced { index: usize },
    RetryReady,
    Celebrate { score: usize, total: usize },
    Reset,
}

/// How an option should be shown for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    Unselected,
    SelectedCorrect,
    SelectedIncorrect,
    Dimmed,
}

/// Question sequencing, answer checking and scoring for one quiz session.
#[derive(Debug)]
pub struct QuizEngine {
    bank: Vec<Question>,
    current_index: usize,
    selected: Option<String>,
    score: usize,
    finished: bool,
    celebrating: bool,
    closing: bool,
    timings: QuizTimings,
    timers: Scheduler<QuizEffect>,
}

impl QuizEngine {
    pub fn new(bank: Vec<Question>, timings: QuizTimings) -> Result<Self, ContentError> {
        if bank.is_empty() {
            return Err(ContentError::EmptyQuizBank);
        }
        Ok(Self {
            bank,
            current_index: 0,
            selected: None,
            score: 0,
            finished: false,
            celebrating: false,
            closing: false,
            timings,
            timers: Scheduler::new(),
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn bank_len(&self) -> usize {
        self.bank.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.bank[self.current_index]
    }

    /// Record an answer for the current question. Ignored while an answer is pending.
    pub fn select_answer(&mut self, option: &str, now: Instant) {
        if self.selected.is_some() {
            return;
        }
        self.selected = Some(option.to_string());

        if self.current_question().is_correct(option) {
            self.score += 1;
            tracing::info!(
                question = self.current_index + 1,
                score = self.score,
                "correct answer"
            );
            self.timers
                .schedule(now, self.timings.correct_delay, QuizEffect::Advance);
        } else {
            tracing::debug!(question = self.current_index + 1, "incorrect answer");
            self.timers.schedule(
                now,
                self.timings.incorrect_delay,
                QuizEffect::ClearSelection,
            );
        }
    }

    /// Back to the first question with a zero score. Pending effects are discarded.
    pub fn reset(&mut self) {
        self.timers.invalidate();
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.finished = false;
        self.closing = false;
    }

    /// Start a session. A reset still waiting from the last close is applied now,
    /// so it can never land in the new session. Returns whether that reset ran.
    pub fn open(&mut self) -> bool {
        if !self.closing {
            return false;
        }
        tracing::debug!("reopened within close grace, resetting now");
        self.reset();
        true
    }

    /// Stop celebrating and reset once the close grace period has passed.
    pub fn close(&mut self, now: Instant) {
        self.celebrating = false;
        self.closing = true;
        self.timers
            .schedule(now, self.timings.close_grace, QuizEffect::Reset);
    }

    /// Apply every deferred effect due at `now`.
    pub fn advance(&mut self, now: Instant) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        for effect in self.timers.drain_due(now) {
            match effect {
                QuizEffect::Advance => {
                    if self.finished {
                        continue;
                    }
                    if self.current_index + 1 < self.bank.len() {
                        self.current_index += 1;
                        self.selected = None;
                        events.push(QuizEvent::Advanced {
                            index: self.current_index,
                        });
                    } else {
                        self.finished = true;
                        self.celebrating = true;
                        tracing::info!(score = self.score, total = self.bank.len(), "quiz finished");
                        events.push(QuizEvent::Celebrate {
                            score: self.score,
                            total: self.bank.len(),
                        });
                    }
                }
                QuizEffect::ClearSelection => {
                    self.selected = None;
                    events.push(QuizEvent::RetryReady);
                }
                QuizEffect::Reset => {
                    self.reset();
                    events.push(QuizEvent::Reset);
                    // reset() invalidated everything still queued in this batch
                    break;
                }
            }
        }
        events
    }

    pub fn option_status(&self, option: &str) -> OptionStatus {
        match &self.selected {
            None => OptionStatus::Unselected,
            Some(selected) if selected != option => OptionStatus::Dimmed,
            Some(_) if self.current_question().is_correct(option) => OptionStatus::SelectedCorrect,
            Some(_) => OptionStatus::SelectedIncorrect,
        }
    }

    pub fn has_pending_effects(&self) -> bool {
        self.timers.live_count() > 0
    }

    /// When the next deferred effect of this session is due.
    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn two_question_bank() -> Vec<Question> {
        vec![
            Question::new("q1", &["a", "b", "c"], "b"),
            Question::new("q2", &["x", "y"], "x"),
        ]
    }

    fn engine() -> QuizEngine {
        QuizEngine::new(two_question_bank(), QuizTimings::default()).unwrap()
    }

    fn later(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_empty_bank_rejected() {
        let result = QuizEngine::new(Vec::new(), QuizTimings::default());
        assert!(matches!(result, Err(ContentError::EmptyQuizBank)));
    }

    #[test]
    fn test_initial_state() {
        let quiz = engine();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.finished());
        assert!(!quiz.has_pending_effects());
    }

    #[test]
    fn test_retry_then_finish_scenario() {
        let start = Instant::now();
        let mut quiz = engine();

        quiz.select_answer("a", start);
        assert_eq!(quiz.selected(), Some("a"));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.advance(later(start, 1000)), vec![QuizEvent::RetryReady]);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.current_index(), 0);

        quiz.select_answer("b", later(start, 1100));
        assert_eq!(quiz.score(), 1);
        assert_eq!(
            quiz.advance(later(start, 2600)),
            vec![QuizEvent::Advanced { index: 1 }]
        );
        assert_eq!(quiz.selected(), None);

        quiz.select_answer("x", later(start, 3000));
        assert!(!quiz.finished());
        assert_eq!(
            quiz.advance(later(start, 4500)),
            vec![QuizEvent::Celebrate { score: 2, total: 2 }]
        );

        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.score(), 2);
        assert!(quiz.finished());
        assert!(quiz.celebrating());
    }

    #[test]
    fn test_correct_answer_waits_for_delay() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("b", start);

        assert!(quiz.advance(later(start, 1499)).is_empty());
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), Some("b"));

        quiz.advance(later(start, 1500));
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn test_selection_while_pending_is_noop() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("a", start);
        quiz.select_answer("b", later(start, 10));

        assert_eq!(quiz.selected(), Some("a"));
        assert_eq!(quiz.score(), 0);

        quiz.advance(later(start, 5000));
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_incorrect_never_changes_score_or_index() {
        let start = Instant::now();
        let mut quiz = engine();
        for attempt in 0..5 {
            let t = later(start, attempt * 2000);
            quiz.select_answer("c", t);
            quiz.advance(later(start, attempt * 2000 + 1000));
            assert_eq!(quiz.score(), 0);
            assert_eq!(quiz.current_index(), 0);
            assert_eq!(quiz.selected(), None);
        }
    }

    #[test]
    fn test_unknown_option_is_incorrect() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("not listed", start);
        assert_eq!(quiz.option_status("not listed"), OptionStatus::SelectedIncorrect);
        assert_eq!(quiz.advance(later(start, 1000)), vec![QuizEvent::RetryReady]);
    }

    #[test]
    fn test_score_tracks_correct_answers_in_order() {
        let bank: Vec<Question> = (0..5)
            .map(|i| Question::new(&format!("q{}", i), &["right", "wrong"], "right"))
            .collect();
        let mut quiz = QuizEngine::new(bank, QuizTimings::default()).unwrap();
        let mut now = Instant::now();

        for k in 1..=5 {
            quiz.select_answer("right", now);
            assert_eq!(quiz.score(), k);
            assert!(!quiz.finished());
            now += Duration::from_millis(1500);
            quiz.advance(now);
        }
        assert!(quiz.finished());
        assert_eq!(quiz.current_index(), 4);
    }

    #[test]
    fn test_no_further_selection_after_finish() {
        let start = Instant::now();
        let mut quiz = QuizEngine::new(
            vec![Question::new("only", &["a", "b"], "a")],
            QuizTimings::default(),
        )
        .unwrap();
        quiz.select_answer("a", start);
        quiz.advance(later(start, 1500));
        assert!(quiz.finished());

        quiz.select_answer("a", later(start, 1600));
        quiz.advance(later(start, 4000));
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_reset_mid_delay_drops_stale_advance() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("b", start);
        quiz.reset();

        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.finished());

        assert!(quiz.advance(later(start, 2000)).is_empty());
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_reset_mid_delay_keeps_new_session_intact() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("a", start);
        quiz.reset();

        // New session answers right away; the old clear must not wipe it.
        quiz.select_answer("b", later(start, 100));
        quiz.advance(later(start, 1000));
        assert_eq!(quiz.selected(), Some("b"));

        quiz.advance(later(start, 1600));
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn test_close_resets_after_grace() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("b", start);
        quiz.advance(later(start, 1500));
        quiz.select_answer("x", later(start, 1600));
        quiz.advance(later(start, 3100));
        assert!(quiz.celebrating());

        quiz.close(later(start, 4000));
        assert!(!quiz.celebrating());
        assert!(quiz.finished());

        assert!(quiz.advance(later(start, 4299)).is_empty());
        assert_eq!(quiz.advance(later(start, 4300)), vec![QuizEvent::Reset]);
        assert!(!quiz.finished());
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_close_during_correct_delay_cancels_advance() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("b", start);
        quiz.close(later(start, 100));

        assert_eq!(quiz.advance(later(start, 400)), vec![QuizEvent::Reset]);
        assert!(quiz.advance(later(start, 2000)).is_empty());
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_reopen_within_close_grace_keeps_new_session() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.select_answer("b", start);
        quiz.close(later(start, 100));
        assert!(quiz.open());
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), None);

        quiz.select_answer("b", later(start, 200));
        assert_eq!(quiz.score(), 1);

        // The reset left over from the close must not touch this session.
        assert!(quiz.advance(later(start, 400)).is_empty());
        assert_eq!(quiz.selected(), Some("b"));
        assert_eq!(quiz.score(), 1);

        assert_eq!(
            quiz.advance(later(start, 1700)),
            vec![QuizEvent::Advanced { index: 1 }]
        );
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_open_after_grace_is_noop() {
        let start = Instant::now();
        let mut quiz = engine();
        quiz.close(start);
        assert_eq!(quiz.advance(later(start, 300)), vec![QuizEvent::Reset]);

        quiz.select_answer("b", later(start, 400));
        assert!(!quiz.open());
        assert_eq!(quiz.selected(), Some("b"));
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_next_due_follows_pending_effects() {
        let start = Instant::now();
        let mut quiz = engine();
        assert_eq!(quiz.next_due(), None);
        quiz.select_answer("a", start);
        assert_eq!(quiz.next_due(), Some(later(start, 1000)));
        quiz.reset();
        assert_eq!(quiz.next_due(), None);
    }

    #[test]
    fn test_option_status() {
        let start = Instant::now();
        let mut quiz = engine();
        assert_eq!(quiz.option_status("a"), OptionStatus::Unselected);
        assert_eq!(quiz.option_status("b"), OptionStatus::Unselected);

        quiz.select_answer("a", start);
        assert_eq!(quiz.option_status("a"), OptionStatus::SelectedIncorrect);
        assert_eq!(quiz.option_status("b"), OptionStatus::Dimmed);
        assert_eq!(quiz.option_status("c"), OptionStatus::Dimmed);

        quiz.advance(later(start, 1000));
        quiz.select_answer("b", later(start, 1100));
        assert_eq!(quiz.option_status("b"), OptionStatus::SelectedCorrect);
        assert_eq!(quiz.option_status("a"), OptionStatus::Dimmed);
    }
}
