use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum TodoCategory {
    #[default]
    Work,
    Personal,
}

impl fmt::Display for TodoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoCategory::Work => write!(f, "Work"),
            TodoCategory::Personal => write!(f, "Personal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub category: TodoCategory,
    #[serde(default)]
    pub is_completed: bool,
    /// `None` means the task has no due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Remind at `due_date`.
    #[serde(default)]
    pub reminder_enabled: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            notes: String::new(),
            category: TodoCategory::Work,
            is_completed: false,
            due_date: None,
            reminder_enabled: false,
        }
    }

    pub fn with_category(mut self, category: TodoCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    pub fn matches_query(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.notes.to_lowercase().contains(query)
    }
}
