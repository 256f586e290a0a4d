use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::data::{Catalog, QuestionProvider};
use crate::models::{HistoryEntry, QuizCategory, QuizResult, SelectionKind};
use crate::quiz::{Advance, QuizSession, Selection, SelectionInput, TickOutcome};
use crate::store::{HistoryRepository, record_history};

/// Slider movement per key press on ranged questions.
const RANGE_STEP: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Selection,
    Question,
    Result(QuizResult),
    History,
}

/// Identifies the question a countdown belongs to. The serial changes with
/// every new session so a restarted quiz never reuses a stale timer.
pub type TimerKey = (u64, usize);

pub struct App {
    pub screen: Screen,
    catalog: Arc<Catalog>,
    categories: Vec<QuizCategory>,
    history: Box<dyn HistoryRepository>,
    question_seconds: u32,
    selected_category: usize,
    session: Option<QuizSession>,
    session_serial: u64,
    cursor: usize,
    history_entries: Vec<HistoryEntry>,
    history_scroll: usize,
    return_screen: Option<Box<Screen>>,
}

impl App {
    pub fn new(catalog: Catalog, history: Box<dyn HistoryRepository>, question_seconds: u32) -> Self {
        let categories = catalog.categories();
        Self {
            screen: Screen::Selection,
            catalog: Arc::new(catalog),
            categories,
            history,
            question_seconds,
            selected_category: 0,
            session: None,
            session_serial: 0,
            cursor: 0,
            history_entries: Vec::new(),
            history_scroll: 0,
            return_screen: None,
        }
    }

    pub fn categories(&self) -> &[QuizCategory] {
        &self.categories
    }

    pub fn selected_category(&self) -> usize {
        self.selected_category
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history_entries(&self) -> &[HistoryEntry] {
        &self.history_entries
    }

    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    pub fn select_next_category(&mut self) {
        if !self.categories.is_empty() {
            self.selected_category = (self.selected_category + 1) % self.categories.len();
        }
    }

    pub fn select_previous_category(&mut self) {
        let count = self.categories.len();
        if count > 0 {
            self.selected_category = (self.selected_category + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        let Some(title) = self
            .categories
            .get(self.selected_category)
            .map(|category| category.title.clone())
        else {
            return;
        };

        let results = Arc::clone(&self.catalog);
        match QuizSession::start(
            &title,
            self.catalog.as_ref(),
            results,
            self.question_seconds,
        ) {
            Ok(session) => {
                self.end_session();
                self.session = Some(session);
                self.session_serial += 1;
                self.cursor = 0;
                self.screen = Screen::Question;
            }
            Err(err) => warn!(category = %title, error = %err, "cannot start quiz"),
        }
    }

    /// The countdown that should be running right now, if any.
    pub fn timer_key(&self) -> Option<TimerKey> {
        if self.screen != Screen::Question {
            return None;
        }
        let index = self.session.as_ref()?.current_index()?;
        Some((self.session_serial, index))
    }

    pub fn on_tick(&mut self) {
        if self.screen != Screen::Question {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let TickOutcome::Advanced(advance) = session.on_timer_tick() {
            self.apply_advance(advance);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let count = self.answer_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let count = self.answer_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn toggle_answer(&mut self) {
        let cursor = self.cursor;
        if let Some(session) = self.session.as_mut() {
            session.set_selection(SelectionInput::Answer(cursor));
        }
    }

    pub fn nudge_range(&mut self, forward: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Selection::Ranged(value) = *session.selection() {
            let step = if forward { RANGE_STEP } else { -RANGE_STEP };
            let next = ((value + step) * 100.0).round() / 100.0;
            session.set_selection(SelectionInput::Range(next));
        }
    }

    /// Refused advances leave the screen as it is.
    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Ok(advance) = session.submit_advance() {
            self.apply_advance(advance);
        }
    }

    pub fn abandon_quiz(&mut self) {
        self.end_session();
        self.screen = Screen::Selection;
    }

    pub fn restart(&mut self) {
        self.end_session();
        self.cursor = 0;
        self.screen = Screen::Selection;
    }

    pub fn open_history(&mut self) {
        self.history_entries = self.history.load();
        self.history_scroll = 0;
        let previous = std::mem::replace(&mut self.screen, Screen::History);
        self.return_screen = Some(Box::new(previous));
    }

    pub fn close_history(&mut self) {
        self.screen = self
            .return_screen
            .take()
            .map(|screen| *screen)
            .unwrap_or(Screen::Selection);
    }

    pub fn scroll_history_down(&mut self) {
        let max_scroll = self.history_entries.len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(max_scroll);
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// Disposes the current session. Called on every exit path, including quit.
    pub fn end_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.dispose();
        }
    }

    fn answer_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(QuizSession::current_question)
            .filter(|question| question.kind != SelectionKind::Ranged)
            .map(|question| question.answers.len())
            .unwrap_or(0)
    }

    fn apply_advance(&mut self, advance: Advance) {
        match advance {
            Advance::Next(_) => self.cursor = 0,
            Advance::Completed(result) => {
                if let Err(err) = record_history(self.history.as_ref(), &result, Utc::now()) {
                    warn!(error = %err, "failed to record quiz history");
                }
                self.end_session();
                self.screen = Screen::Result(result);
            }
        }
    }
}
