//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with quiz content.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("quiz '{0}' has no questions")]
    EmptyQuiz(String),
    #[error("ranged question '{question}' needs exactly 2 answers, found {found}")]
    RangedEndpoints { question: String, found: usize },
    #[error("question '{question}' has no answers")]
    NoAnswers { question: String },
}

/// Error loading a quiz catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} contains no quiz categories", path.display())]
    NoCategories { path: PathBuf },
    #[error("invalid content in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: QuizError,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode data: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("please enter a title for the task")]
    MissingTitle,
    #[error("no task matches id '{0}'")]
    NotFound(String),
    #[error("id '{0}' matches more than one task")]
    Ambiguous(String),
    #[error("set a due date to enable reminders")]
    ReminderNeedsDueDate,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure of a `history` or `todo` command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid due date '{0}', expected YYYY-MM-DD HH:MM")]
    BadDueDate(String),
    #[error(transparent)]
    Todo(#[from] TodoError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Error type for running the quiz front-end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid quiz: {0}")]
    Quiz(#[from] QuizError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
