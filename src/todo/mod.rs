//! To-do list: tasks with categories, due dates and reminders.

mod filter;
mod list;
mod reminder;

pub use filter::{DueStatus, TodoFilter, due_status, filter_todos};
pub use list::TodoList;
pub use reminder::{LogReminders, ReminderScheduler, sync_reminder};

#[cfg(test)]
pub(crate) use reminder::testing;
