use tracing::info;
use uuid::Uuid;

use crate::models::Todo;

/// Delivers due-date reminders. Delivery itself belongs to the platform.
pub trait ReminderScheduler {
    fn schedule(&self, todo: &Todo);

    fn cancel(&self, id: Uuid);
}

/// A reminder is pending only for open tasks with a due date and the
/// reminder switched on. Anything else cancels it.
pub fn sync_reminder<N: ReminderScheduler + ?Sized>(scheduler: &N, todo: &Todo) {
    if todo.reminder_enabled && todo.due_date.is_some() && !todo.is_completed {
        scheduler.schedule(todo);
    } else {
        scheduler.cancel(todo.id);
    }
}

/// Writes reminder requests to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReminders;

impl ReminderScheduler for LogReminders {
    fn schedule(&self, todo: &Todo) {
        if let Some(due) = todo.due_date {
            info!(id = %todo.id, title = %todo.title, due = %due, "reminder scheduled");
        }
    }

    fn cancel(&self, id: Uuid) {
        info!(%id, "reminder cancelled");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Schedule(Uuid),
        Cancel(Uuid),
    }

    /// Clones share one call log, so a test can keep a handle after moving
    /// the scheduler into a `TodoList`.
    #[derive(Default, Clone)]
    pub struct RecordingReminders {
        pub calls: Rc<RefCell<Vec<Call>>>,
    }

    impl ReminderScheduler for RecordingReminders {
        fn schedule(&self, todo: &Todo) {
            self.calls.borrow_mut().push(Call::Schedule(todo.id));
        }

        fn cancel(&self, id: Uuid) {
            self.calls.borrow_mut().push(Call::Cancel(id));
        }
    }
}
