//! One user's pass through a quiz.
//!
//! A [`QuizSession`] owns the quiz, the selection for the displayed
//! question, the score tally and the question countdown. It never renders
//! anything: the host feeds it user input, calls [`QuizSession::on_timer_tick`]
//! once per second and reads back state.
//!
//! Manual advances and timer expiry both go through the same gate, keyed on
//! the question index, so a tick racing a key press for the same question
//! produces exactly one transition.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::data::{QuestionProvider, ResultLookup};
use crate::error::QuizError;
use crate::models::{Question, Quiz, QuizResult, ResultCopy, SelectionKind};

use super::countdown::{Countdown, CountdownTick};
use super::scoring::{BUCKET_LABELS, DEFAULT_RANGE_VALUE, ScoreTally, range_bucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the question at this index.
    Displaying(usize),
    /// A manual advance is being applied.
    Advancing,
    /// A timeout is being applied.
    TimedOut,
    Completed,
}

/// What the user has picked for the displayed question.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(Option<usize>),
    Multiple(BTreeSet<usize>),
    Ranged(f64),
}

impl Selection {
    pub fn empty_for(kind: SelectionKind) -> Self {
        match kind {
            SelectionKind::Single => Selection::Single(None),
            SelectionKind::Multiple => Selection::Multiple(BTreeSet::new()),
            SelectionKind::Ranged => Selection::Ranged(DEFAULT_RANGE_VALUE),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        match self {
            Selection::Single(selected) => *selected == Some(index),
            Selection::Multiple(selected) => selected.contains(&index),
            Selection::Ranged(_) => false,
        }
    }

    /// Ranged selections always hold a value.
    pub fn is_complete(&self) -> bool {
        match self {
            Selection::Single(selected) => selected.is_some(),
            Selection::Multiple(selected) => !selected.is_empty(),
            Selection::Ranged(_) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionInput {
    /// Pick (Single) or toggle (Multiple) the answer at this index.
    Answer(usize),
    /// Slider value for a ranged question.
    Range(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Next(usize),
    Completed(QuizResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceRefused {
    #[error("no answer selected")]
    NoSelection,
    #[error("question {requested} is no longer displayed ({state:?})")]
    StaleQuestion {
        requested: usize,
        state: SessionState,
    },
    #[error("the session has ended")]
    Ended,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    Counting(u32),
    Advanced(Advance),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Manual,
    Timeout,
}

pub struct QuizSession {
    quiz: Quiz,
    results: Arc<dyn ResultLookup + Send + Sync>,
    state: SessionState,
    selection: Selection,
    tally: ScoreTally,
    countdown: Countdown,
    questions_shown: usize,
    result: Option<QuizResult>,
    disposed: bool,
}

impl QuizSession {
    /// Starts a session on the first question with a fresh countdown.
    pub fn new(
        quiz: Quiz,
        results: Arc<dyn ResultLookup + Send + Sync>,
        question_seconds: u32,
    ) -> Result<Self, QuizError> {
        quiz.validate()?;
        let selection = Selection::empty_for(quiz.questions[0].kind);
        let mut countdown = Countdown::new(question_seconds);
        countdown.start();

        debug!(quiz = %quiz.id, questions = quiz.len(), "quiz session started");

        Ok(Self {
            quiz,
            results,
            state: SessionState::Displaying(0),
            selection,
            tally: ScoreTally::new(),
            countdown,
            questions_shown: 1,
            result: None,
            disposed: false,
        })
    }

    /// Builds the quiz for a chosen category and starts it.
    pub fn start(
        category: &str,
        provider: &dyn QuestionProvider,
        results: Arc<dyn ResultLookup + Send + Sync>,
        question_seconds: u32,
    ) -> Result<Self, QuizError> {
        let quiz = Quiz::new(category, provider.questions(category));
        Self::new(quiz, results, question_seconds)
    }

    pub fn current_state(&self) -> SessionState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::Displaying(index) if !self.disposed => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|index| &self.quiz.questions[index])
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Number of `Displaying` states entered so far.
    pub fn questions_shown(&self) -> usize {
        self.questions_shown
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Records input for the displayed question. Returns false when the input
    /// does not apply to it.
    pub fn set_selection(&mut self, input: SelectionInput) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let answer_count = question.answers.len();

        match (&mut self.selection, input) {
            (Selection::Single(selected), SelectionInput::Answer(index)) if index < answer_count => {
                *selected = Some(index);
                true
            }
            (Selection::Multiple(selected), SelectionInput::Answer(index)) if index < answer_count => {
                if !selected.remove(&index) {
                    selected.insert(index);
                }
                true
            }
            (Selection::Ranged(current), SelectionInput::Range(value)) if !value.is_nan() => {
                *current = value.clamp(0.0, 1.0);
                true
            }
            _ => false,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_index().is_some() && self.selection.is_complete()
    }

    /// Manual advance from the displayed question.
    pub fn submit_advance(&mut self) -> Result<Advance, AdvanceRefused> {
        let index = self.gate_index()?;
        self.advance_from(index, Trigger::Manual)
    }

    /// Manual advance that only applies while `index` is still displayed.
    pub fn submit_advance_for(&mut self, index: usize) -> Result<Advance, AdvanceRefused> {
        self.advance_from(index, Trigger::Manual)
    }

    /// Timeout transition for `index`. Appends nothing to the tally.
    pub fn expire(&mut self, index: usize) -> Result<Advance, AdvanceRefused> {
        self.advance_from(index, Trigger::Timeout)
    }

    /// One unit of wall-clock time passed.
    pub fn on_timer_tick(&mut self) -> TickOutcome {
        let Some(index) = self.current_index() else {
            return TickOutcome::Idle;
        };

        match self.countdown.tick() {
            CountdownTick::Idle => TickOutcome::Idle,
            CountdownTick::Running(remaining) => TickOutcome::Counting(remaining),
            CountdownTick::Expired => match self.expire(index) {
                Ok(advance) => TickOutcome::Advanced(advance),
                Err(_) => TickOutcome::Idle,
            },
        }
    }

    /// Stops the countdown for good. Called by the host on teardown.
    pub fn dispose(&mut self) {
        if !self.disposed {
            debug!(quiz = %self.quiz.id, state = ?self.state, "quiz session disposed");
        }
        self.countdown.cancel();
        self.disposed = true;
    }

    fn gate_index(&self) -> Result<usize, AdvanceRefused> {
        if self.disposed {
            return Err(AdvanceRefused::Ended);
        }
        match self.state {
            SessionState::Displaying(index) => Ok(index),
            SessionState::Completed => Err(AdvanceRefused::Ended),
            state => Err(AdvanceRefused::StaleQuestion {
                requested: self.questions_shown.saturating_sub(1),
                state,
            }),
        }
    }

    fn advance_from(&mut self, index: usize, trigger: Trigger) -> Result<Advance, AdvanceRefused> {
        let current = self.gate_index()?;
        if current != index {
            return Err(AdvanceRefused::StaleQuestion {
                requested: index,
                state: self.state,
            });
        }

        let signal = match trigger {
            Trigger::Manual => Some(self.scoring_signal().ok_or(AdvanceRefused::NoSelection)?),
            Trigger::Timeout => None,
        };

        self.state = match trigger {
            Trigger::Manual => SessionState::Advancing,
            Trigger::Timeout => SessionState::TimedOut,
        };
        self.countdown.cancel();

        match signal {
            Some(buckets) => {
                debug!(question = index, ?buckets, "answer recorded");
                self.tally.extend(buckets);
            }
            None => debug!(question = index, "question timed out"),
        }

        let next = index + 1;
        if next < self.quiz.len() {
            self.selection = Selection::empty_for(self.quiz.questions[next].kind);
            self.state = SessionState::Displaying(next);
            self.questions_shown += 1;
            self.countdown.start();
            Ok(Advance::Next(next))
        } else {
            let result = self.finish();
            self.state = SessionState::Completed;
            Ok(Advance::Completed(result))
        }
    }

    /// Buckets contributed by the current selection, or `None` when empty.
    fn scoring_signal(&self) -> Option<Vec<String>> {
        if !self.selection.is_complete() {
            return None;
        }
        let question = self.current_question()?;

        let buckets = match &self.selection {
            Selection::Single(selected) => {
                let answer = question.answers.get((*selected)?)?;
                vec![answer.bucket_id.clone()]
            }
            Selection::Multiple(selected) => selected
                .iter()
                .filter_map(|&index| question.answers.get(index))
                .map(|answer| answer.bucket_id.clone())
                .collect(),
            Selection::Ranged(value) => vec![range_bucket(*value).to_string()],
        };
        Some(buckets)
    }

    fn finish(&mut self) -> QuizResult {
        let bucket = self.tally.dominant().unwrap_or(BUCKET_LABELS[0]).to_string();
        let copy = self
            .results
            .describe(&self.quiz.title, &bucket)
            .unwrap_or_else(ResultCopy::placeholder);

        let result = QuizResult {
            quiz_title: self.quiz.title.clone(),
            result_title: copy.title,
            result_description: copy.description,
            dominant_bucket: bucket,
        };
        info!(
            quiz = %self.quiz.id,
            bucket = %result.dominant_bucket,
            answers = self.tally.len(),
            "quiz completed"
        );
        self.result = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    struct NoCopy;

    impl ResultLookup for NoCopy {
        fn describe(&self, _quiz_title: &str, _bucket: &str) -> Option<ResultCopy> {
            None
        }
    }

    fn four_answers() -> Vec<Answer> {
        ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, bucket)| Answer::new(format!("Option {}", i + 1), *bucket))
            .collect()
    }

    fn session(kinds: &[SelectionKind]) -> QuizSession {
        let questions = kinds
            .iter()
            .map(|kind| match kind {
                SelectionKind::Ranged => Question::new(
                    "Slide",
                    *kind,
                    vec![Answer::new("Low", "A"), Answer::new("High", "D")],
                ),
                _ => Question::new("Pick", *kind, four_answers()),
            })
            .collect();
        QuizSession::new(Quiz::new("Test Quiz", questions), Arc::new(NoCopy), 15).unwrap()
    }

    #[test]
    fn single_selection_replaces_previous_choice() {
        let mut session = session(&[SelectionKind::Single]);
        assert!(session.set_selection(SelectionInput::Answer(1)));
        assert!(session.set_selection(SelectionInput::Answer(3)));
        assert_eq!(session.selection(), &Selection::Single(Some(3)));
    }

    #[test]
    fn multiple_selection_toggles() {
        let mut session = session(&[SelectionKind::Multiple]);
        session.set_selection(SelectionInput::Answer(2));
        session.set_selection(SelectionInput::Answer(0));
        session.set_selection(SelectionInput::Answer(2));
        assert_eq!(session.selection(), &Selection::Multiple(BTreeSet::from([0])));
    }

    #[test]
    fn mismatched_input_is_rejected() {
        let mut session = session(&[SelectionKind::Single, SelectionKind::Ranged]);
        assert!(!session.set_selection(SelectionInput::Range(0.3)));
        assert!(!session.set_selection(SelectionInput::Answer(9)));
        session.set_selection(SelectionInput::Answer(0));
        session.submit_advance().unwrap();
        assert!(!session.set_selection(SelectionInput::Answer(0)));
        assert!(session.set_selection(SelectionInput::Range(2.0)));
        assert_eq!(session.selection(), &Selection::Ranged(1.0));
    }

    #[test]
    fn advance_without_selection_is_refused() {
        let mut session = session(&[SelectionKind::Single, SelectionKind::Multiple]);
        assert_eq!(session.submit_advance(), Err(AdvanceRefused::NoSelection));
        assert_eq!(session.current_state(), SessionState::Displaying(0));
        assert!(session.tally().is_empty());
    }

    #[test]
    fn manual_advance_resets_selection_and_timer() {
        let mut session = session(&[SelectionKind::Single, SelectionKind::Multiple]);
        for _ in 0..5 {
            session.on_timer_tick();
        }
        session.set_selection(SelectionInput::Answer(1));
        assert_eq!(session.submit_advance(), Ok(Advance::Next(1)));
        assert_eq!(session.selection(), &Selection::Multiple(BTreeSet::new()));
        assert_eq!(session.seconds_remaining(), 15);
        assert_eq!(session.tally().entries(), ["B"]);
    }

    #[test]
    fn stale_index_is_ignored() {
        let mut session = session(&[SelectionKind::Single, SelectionKind::Single]);
        session.set_selection(SelectionInput::Answer(0));
        session.submit_advance_for(0).unwrap();
        assert!(matches!(
            session.expire(0),
            Err(AdvanceRefused::StaleQuestion { requested: 0, .. })
        ));
        assert_eq!(session.current_state(), SessionState::Displaying(1));
        assert_eq!(session.tally().len(), 1);
    }

    #[test]
    fn empty_tally_defaults_to_first_bucket_and_placeholder_copy() {
        let mut session = session(&[SelectionKind::Single]);
        let Ok(Advance::Completed(result)) = session.expire(0) else {
            panic!("expected completion");
        };
        assert_eq!(result.dominant_bucket, "A");
        assert_eq!(result.result_title, ResultCopy::placeholder().title);
        assert_eq!(session.current_state(), SessionState::Completed);
        assert_eq!(session.submit_advance(), Err(AdvanceRefused::Ended));
    }

    #[test]
    fn disposed_session_ignores_everything() {
        let mut session = session(&[SelectionKind::Single]);
        session.set_selection(SelectionInput::Answer(0));
        session.dispose();
        assert_eq!(session.on_timer_tick(), TickOutcome::Idle);
        assert_eq!(session.submit_advance(), Err(AdvanceRefused::Ended));
        assert!(session.current_question().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let result = QuizSession::new(Quiz::new("Empty", Vec::new()), Arc::new(NoCopy), 15);
        assert!(matches!(result, Err(QuizError::EmptyQuiz(_))));
    }
}
