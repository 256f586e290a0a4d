//! Non-interactive commands for quiz history and the to-do list.

use std::io::Write;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::{Args, Subcommand};
use crossterm::style::Stylize;

use crate::error::{CommandError, TodoError};
use crate::models::{HistoryEntry, Todo, TodoCategory};
use crate::store::{HistoryRepository, TodoRepository};
use crate::todo::{DueStatus, ReminderScheduler, TodoFilter, TodoList, due_status};

const DUE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// List tasks
    List {
        #[arg(short, long, value_enum, default_value_t = TodoFilter::All)]
        filter: TodoFilter,
        /// Only tasks whose title or notes contain this text
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Add a task
    Add(TodoFields),
    /// Edit a task by id (or unique id prefix)
    Edit {
        id: String,
        #[command(flatten)]
        fields: TodoFields,
        /// Remove the due date (and its reminder)
        #[arg(long, conflicts_with = "due")]
        no_due: bool,
    },
    /// Mark a task done, or open again
    Toggle { id: String },
    /// Delete a task
    Rm { id: String },
}

#[derive(Args, Debug, Default)]
pub struct TodoFields {
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(short, long, value_enum)]
    pub category: Option<TodoCategory>,
    /// Due date as "YYYY-MM-DD HH:MM" in local time
    #[arg(short, long)]
    pub due: Option<String>,
    /// Remind when the task is due (needs a due date)
    #[arg(short, long)]
    pub remind: bool,
    /// Switch the reminder off
    #[arg(long, conflicts_with = "remind")]
    pub no_remind: bool,
}

/// Parses a local "YYYY-MM-DD HH:MM" timestamp.
pub fn parse_due(input: &str) -> Result<DateTime<Utc>, CommandError> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DUE_INPUT_FORMAT)
        .map_err(|_| CommandError::BadDueDate(input.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CommandError::BadDueDate(input.to_string()))
}

pub fn format_due(due: DateTime<Utc>) -> String {
    due.with_timezone(&Local).format("%b %-d • %-I:%M %p").to_string()
}

pub fn run_history<W: Write>(
    out: &mut W,
    repo: &dyn HistoryRepository,
    clear: bool,
) -> Result<(), CommandError> {
    if clear {
        repo.clear()?;
        writeln!(out, "History cleared.")?;
        return Ok(());
    }

    let entries = repo.load();
    if entries.is_empty() {
        writeln!(out, "No quizzes completed yet.")?;
    }
    for entry in &entries {
        writeln!(out, "{}", history_line(entry))?;
    }
    Ok(())
}

fn history_line(entry: &HistoryEntry) -> String {
    format!(
        "{}  {}  ({})",
        entry
            .completed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M"),
        entry.result_title,
        entry.quiz_title
    )
}

pub fn run_todo<W, R, N>(
    out: &mut W,
    list: &mut TodoList<R, N>,
    command: TodoCommand,
    now: DateTime<Utc>,
) -> Result<(), CommandError>
where
    W: Write,
    R: TodoRepository,
    N: ReminderScheduler,
{
    match command {
        TodoCommand::List { filter, search } => {
            let todos = list.filtered(filter, &search);
            if todos.is_empty() {
                writeln!(out, "No tasks.")?;
            }
            for todo in todos {
                writeln!(out, "{}", todo_line(todo, now))?;
            }
        }
        TodoCommand::Add(fields) => {
            let mut todo = Todo::new(fields.title.clone().unwrap_or_default());
            apply_fields(&mut todo, fields)?;
            let saved = list.save(todo)?;
            writeln!(out, "Added {}", todo_line(saved, now))?;
        }
        TodoCommand::Edit { id, fields, no_due } => {
            let mut todo = list.resolve(&id)?.clone();
            if no_due {
                todo.due_date = None;
            }
            apply_fields(&mut todo, fields)?;
            let saved = list.save(todo)?;
            writeln!(out, "Updated {}", todo_line(saved, now))?;
        }
        TodoCommand::Toggle { id } => {
            let id = list.resolve(&id)?.id;
            let todo = list.toggle_completion(id)?;
            writeln!(out, "{}", todo_line(todo, now))?;
        }
        TodoCommand::Rm { id } => {
            let id = list.resolve(&id)?.id;
            let removed = list.delete(id)?;
            writeln!(out, "Deleted \"{}\"", removed.title)?;
        }
    }
    Ok(())
}

fn apply_fields(todo: &mut Todo, fields: TodoFields) -> Result<(), CommandError> {
    if let Some(title) = fields.title {
        todo.title = title;
    }
    if let Some(notes) = fields.notes {
        todo.notes = notes;
    }
    if let Some(category) = fields.category {
        todo.category = category;
    }
    if let Some(due) = fields.due {
        todo.due_date = Some(parse_due(&due)?);
    }
    if fields.remind {
        if todo.due_date.is_none() {
            return Err(TodoError::ReminderNeedsDueDate.into());
        }
        todo.reminder_enabled = true;
    }
    if fields.no_remind {
        todo.reminder_enabled = false;
    }
    Ok(())
}

fn todo_line(todo: &Todo, now: DateTime<Utc>) -> String {
    let check = if todo.is_completed { "[x]" } else { "[ ]" };
    let short_id: String = todo.id.to_string().chars().take(8).collect();

    let mut subtitle = todo.category.to_string();
    if let Some(due) = todo.due_date {
        let due = format_due(due);
        let due = match due_status(todo, now) {
            DueStatus::Overdue => due.red().to_string(),
            DueStatus::Soon => due.blue().to_string(),
            DueStatus::Later | DueStatus::None => due,
        };
        subtitle = format!("{} • {}", subtitle, due);
    }
    if todo.reminder_enabled {
        subtitle.push_str(" • reminder");
    }

    format!("{} {}  {}  {}", check, short_id.dark_grey(), todo.title, subtitle)
}
