//! Quiz flow: timed questions, scoring and result derivation.

pub mod countdown;
pub mod scoring;
pub mod session;

pub use countdown::{Countdown, CountdownTick, DEFAULT_QUESTION_SECONDS};
pub use scoring::{BUCKET_LABELS, ScoreTally, dominant_bucket, range_bucket};
pub use session::{
    Advance, AdvanceRefused, QuizSession, Selection, SelectionInput, SessionState, TickOutcome,
};
