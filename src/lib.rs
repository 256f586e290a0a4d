//! # persona-kit
//!
//! A terminal personality quiz and to-do list.
//!
//! The quiz core is [`QuizSession`]: it walks one user through a list of
//! timed questions, tallies answer buckets and derives a [`QuizResult`].
//! It knows nothing about rendering; [`QuizApp`] hosts it in a terminal UI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use persona_kit::{Catalog, JsonStore, QuizApp};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builtin()?;
//!     let history = JsonStore::new("./data")?;
//!
//!     QuizApp::new(catalog, Box::new(history), 15).run().await?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
mod event;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod store;
pub mod terminal;
pub mod todo;
mod ui;

use crossterm::event::KeyCode;

pub use app::{App, Screen};
pub use data::{Catalog, QuestionProvider, ResultLookup, load_catalog_from_json};
pub use error::{AppError, CommandError, LoadError, QuizError, StoreError, TodoError};
pub use models::{Answer, HistoryEntry, Question, Quiz, QuizResult, SelectionKind, Todo};
pub use quiz::{Advance, AdvanceRefused, QuizSession, SelectionInput, SessionState, TickOutcome};
pub use store::{HistoryRepository, JsonStore, MemoryStore, TodoRepository};
pub use todo::{TodoFilter, TodoList};

use event::is_quit;

/// The quiz screens, ready to run in the terminal.
pub struct QuizApp {
    app: App,
}

impl QuizApp {
    pub fn new(catalog: Catalog, history: Box<dyn HistoryRepository>, question_seconds: u32) -> Self {
        Self {
            app: App::new(catalog, history, question_seconds),
        }
    }

    /// Takes over the terminal until the user quits. The active session, if
    /// any, is disposed before returning.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        event::run(&mut guard, &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Selection => handle_selection_input(app, key),
        Screen::Question => handle_question_input(app, key),
        Screen::Result(_) => handle_result_input(app, key),
        Screen::History => handle_history_input(app, key),
    }
}

fn handle_selection_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_category(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_category(),
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Char('h') | KeyCode::Char('H') => app.open_history(),
        KeyCode::Esc => return true,
        key => return is_quit(key),
    }
    false
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Left | KeyCode::Char('h') => app.nudge_range(false),
        KeyCode::Right | KeyCode::Char('l') => app.nudge_range(true),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_answer(),
        KeyCode::Enter => app.submit_answer(),
        KeyCode::Esc => app.abandon_quiz(),
        key => return is_quit(key),
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('h') | KeyCode::Char('H') => app.open_history(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.restart(),
        key => return is_quit(key),
    }
    false
}

fn handle_history_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_history_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_history_up(),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.close_history(),
        key => return is_quit(key),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), Box::new(MemoryStore::new()), 15)
    }

    #[test]
    fn keys_drive_a_full_single_answer_flow() {
        let mut app = app();
        assert!(!handle_input(&mut app, KeyCode::Char('j')));
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Question);

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(
            app.session().unwrap().current_state(),
            SessionState::Displaying(0)
        );

        handle_input(&mut app, KeyCode::Char(' '));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().unwrap().current_state(),
            SessionState::Displaying(1)
        );
    }

    #[test]
    fn escape_leaves_the_quiz_without_quitting() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        assert!(!handle_input(&mut app, KeyCode::Esc));
        assert_eq!(app.screen, Screen::Selection);
        assert!(app.session().is_none());
    }

    #[test]
    fn history_returns_to_previous_screen() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('h'));
        assert_eq!(app.screen, Screen::History);
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Selection);
    }

    #[test]
    fn q_quits_from_every_screen() {
        let mut app = app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        handle_input(&mut app, KeyCode::Enter);
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
    }
}
