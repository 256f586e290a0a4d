use std::cell::RefCell;

use crate::error::StoreError;
use crate::models::{HistoryEntry, Todo};

use super::{HistoryRepository, TodoRepository};

/// In-memory repositories, for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    history: RefCell<Vec<HistoryEntry>>,
    todos: RefCell<Option<Vec<Todo>>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RefCell::new(Some(todos)),
            ..Self::default()
        }
    }

    /// Number of save calls across both repositories.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl HistoryRepository for MemoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.history.borrow().clone()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        *self.history.borrow_mut() = entries.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl TodoRepository for MemoryStore {
    fn load(&self) -> Option<Vec<Todo>> {
        self.todos.borrow().clone()
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        *self.todos.borrow_mut() = Some(todos.to_vec());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
