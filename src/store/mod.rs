//! Repositories for quiz history and to-do items.
//!
//! Every mutation writes the whole collection back; the collections are
//! small enough that nothing smarter is needed.

mod json_store;
mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{HistoryEntry, QuizResult, Todo};

/// Completed quizzes, newest first.
pub trait HistoryRepository {
    fn load(&self) -> Vec<HistoryEntry>;

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError>;

    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.insert(0, entry);
        self.save(&entries)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }
}

pub trait TodoRepository {
    /// `None` when nothing usable is stored yet (missing or unreadable).
    fn load(&self) -> Option<Vec<Todo>>;

    fn save(&self, todos: &[Todo]) -> Result<(), StoreError>;
}

/// Appends a history entry for a finished quiz.
pub fn record_history(
    repo: &dyn HistoryRepository,
    result: &QuizResult,
    completed_at: DateTime<Utc>,
) -> Result<HistoryEntry, StoreError> {
    let entry = HistoryEntry::from_result(result, completed_at);
    repo.append(entry.clone())?;
    Ok(entry)
}
