//! Quiz content: categories, questions and result copy.

mod catalog;
mod loader;

pub use catalog::{Catalog, CategoryContent};
pub use loader::{load_catalog_from_json, parse_catalog};

use crate::models::{Question, QuizCategory, ResultCopy};

/// Supplies the question list for a chosen category.
pub trait QuestionProvider {
    fn categories(&self) -> Vec<QuizCategory>;

    fn questions(&self, category_title: &str) -> Vec<Question>;
}

/// Maps a winning bucket to display copy.
pub trait ResultLookup {
    fn describe(&self, quiz_title: &str, bucket: &str) -> Option<ResultCopy>;
}
