use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::TodoError;
use crate::models::{Todo, TodoCategory};
use crate::store::TodoRepository;

use super::filter::{TodoFilter, filter_todos};
use super::reminder::{ReminderScheduler, sync_reminder};

/// The task list, backed by a repository. Every mutation persists the full
/// list and keeps reminders in sync.
pub struct TodoList<R, N> {
    repo: R,
    reminders: N,
    todos: Vec<Todo>,
}

impl<R: TodoRepository, N: ReminderScheduler> TodoList<R, N> {
    /// Loads stored tasks, seeding a small sample set on first launch or when
    /// the stored data cannot be read.
    pub fn open(repo: R, reminders: N, now: DateTime<Utc>) -> Result<Self, TodoError> {
        let (todos, seeded) = match repo.load() {
            Some(todos) => (todos, false),
            None => (sample_todos(now), true),
        };

        let list = Self {
            repo,
            reminders,
            todos,
        };
        if seeded {
            info!(count = list.todos.len(), "seeding sample tasks");
            list.persist()?;
        }
        Ok(list)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Finds a task by a unique prefix of its id.
    pub fn resolve(&self, prefix: &str) -> Result<&Todo, TodoError> {
        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(TodoError::NotFound(prefix.to_string()));
        }

        let mut matches = self
            .todos
            .iter()
            .filter(|todo| todo.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(todo), None) => Ok(todo),
            (Some(_), Some(_)) => Err(TodoError::Ambiguous(prefix.to_string())),
            (None, _) => Err(TodoError::NotFound(prefix.to_string())),
        }
    }

    pub fn filtered(&self, filter: TodoFilter, query: &str) -> Vec<&Todo> {
        filter_todos(&self.todos, filter, query)
    }

    /// Adds a new task at the top of the list or replaces the one with the
    /// same id.
    pub fn save(&mut self, mut todo: Todo) -> Result<&Todo, TodoError> {
        let title = todo.title.trim();
        if title.is_empty() {
            return Err(TodoError::MissingTitle);
        }
        todo.title = title.to_string();
        if todo.due_date.is_none() {
            todo.reminder_enabled = false;
        }

        sync_reminder(&self.reminders, &todo);

        let index = match self.todos.iter().position(|existing| existing.id == todo.id) {
            Some(index) => {
                debug!(id = %todo.id, "task updated");
                self.todos[index] = todo;
                index
            }
            None => {
                debug!(id = %todo.id, "task added");
                self.todos.insert(0, todo);
                0
            }
        };
        self.persist()?;
        Ok(&self.todos[index])
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let removed = self.todos.remove(index);
        self.reminders.cancel(removed.id);
        self.persist()?;
        Ok(removed)
    }

    /// Completing a task also switches its reminder off.
    pub fn toggle_completion(&mut self, id: Uuid) -> Result<&Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        let todo = &mut self.todos[index];
        todo.is_completed = !todo.is_completed;
        if todo.is_completed {
            todo.reminder_enabled = false;
            self.reminders.cancel(todo.id);
        }
        self.persist()?;
        Ok(&self.todos[index])
    }

    fn persist(&self) -> Result<(), TodoError> {
        self.repo.save(&self.todos)?;
        Ok(())
    }
}

fn sample_todos(now: DateTime<Utc>) -> Vec<Todo> {
    vec![
        Todo::new("Submit Assignment").with_due_date(now - Duration::hours(2)),
        Todo::new("Finish UI Design")
            .with_category(TodoCategory::Personal)
            .with_due_date(now + Duration::hours(5)),
        Todo::new("Buy Groceries").with_category(TodoCategory::Personal),
        Todo::new("Workout").completed(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::todo::reminder::testing::{Call, RecordingReminders};

    fn open_empty() -> TodoList<MemoryStore, RecordingReminders> {
        TodoList::open(
            MemoryStore::with_todos(Vec::new()),
            RecordingReminders::default(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn first_launch_seeds_and_saves_samples() {
        let list = TodoList::open(MemoryStore::new(), RecordingReminders::default(), Utc::now())
            .unwrap();
        assert_eq!(list.todos().len(), 4);
        assert_eq!(list.repo.save_count(), 1);
        assert_eq!(list.repo.load().unwrap().len(), 4);
    }

    #[test]
    fn existing_data_is_not_reseeded() {
        let list = open_empty();
        assert!(list.todos().is_empty());
        assert_eq!(list.repo.save_count(), 0);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut list = open_empty();
        assert!(matches!(list.save(Todo::new("   ")), Err(TodoError::MissingTitle)));
        assert_eq!(list.repo.save_count(), 0);
    }

    #[test]
    fn new_tasks_go_to_the_top_and_updates_stay_in_place() {
        let mut list = open_empty();
        let first = list.save(Todo::new("First")).unwrap().clone();
        list.save(Todo::new("  Second  ")).unwrap();

        let mut edited = first.clone();
        edited.notes = "edited".to_string();
        list.save(edited).unwrap();

        let titles: Vec<&str> = list.todos().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
        assert_eq!(list.get(first.id).unwrap().notes, "edited");
        assert_eq!(list.repo.load().unwrap().len(), 2);
    }

    #[test]
    fn reminder_is_dropped_without_due_date() {
        let mut list = open_empty();
        let mut todo = Todo::new("Call mom");
        todo.reminder_enabled = true;
        let saved = list.save(todo).unwrap().clone();
        assert!(!saved.reminder_enabled);
        assert_eq!(*list.reminders.calls.borrow(), [Call::Cancel(saved.id)]);
    }

    #[test]
    fn completing_cancels_reminder() {
        let mut list = open_empty();
        let mut todo = Todo::new("Pay rent").with_due_date(Utc::now() + Duration::days(1));
        todo.reminder_enabled = true;
        let id = list.save(todo).unwrap().id;

        let toggled = list.toggle_completion(id).unwrap();
        assert!(toggled.is_completed);
        assert!(!toggled.reminder_enabled);
        assert_eq!(
            *list.reminders.calls.borrow(),
            [Call::Schedule(id), Call::Cancel(id)]
        );

        assert!(!list.toggle_completion(id).unwrap().is_completed);
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut list = open_empty();
        let id = list.save(Todo::new("Temporary")).unwrap().id;
        list.delete(id).unwrap();
        assert!(list.get(id).is_none());
        assert!(list.repo.load().unwrap().is_empty());
        assert!(matches!(list.delete(id), Err(TodoError::NotFound(_))));
    }

    #[test]
    fn resolve_by_prefix() {
        let mut list = open_empty();
        let id = list.save(Todo::new("Unique")).unwrap().id;
        let prefix = &id.to_string()[..8];
        assert_eq!(list.resolve(prefix).unwrap().id, id);
        assert!(matches!(list.resolve("zzzz"), Err(TodoError::NotFound(_))));
        assert!(matches!(list.resolve(""), Err(TodoError::NotFound(_))));
    }
}
