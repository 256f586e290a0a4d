use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;

use crate::models::{Todo, TodoCategory};

/// Segments of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TodoFilter {
    #[default]
    All,
    /// Open work tasks.
    Work,
    /// Open personal tasks.
    Personal,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Work => todo.category == TodoCategory::Work && !todo.is_completed,
            TodoFilter::Personal => todo.category == TodoCategory::Personal && !todo.is_completed,
            TodoFilter::Completed => todo.is_completed,
        }
    }
}

/// Applies the segment filter and a case-insensitive search on title and
/// notes. A blank query matches everything.
pub fn filter_todos<'a>(todos: &'a [Todo], filter: TodoFilter, query: &str) -> Vec<&'a Todo> {
    let query = query.trim().to_lowercase();
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .filter(|todo| query.is_empty() || todo.matches_query(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// No due date, or already done.
    None,
    Overdue,
    /// Due within the next 24 hours.
    Soon,
    Later,
}

pub fn due_status(todo: &Todo, now: DateTime<Utc>) -> DueStatus {
    let Some(due) = todo.due_date else {
        return DueStatus::None;
    };
    if todo.is_completed {
        DueStatus::None
    } else if due < now {
        DueStatus::Overdue
    } else if due <= now + Duration::hours(24) {
        DueStatus::Soon
    } else {
        DueStatus::Later
    }
}
