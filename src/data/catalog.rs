use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::LoadError;
use crate::models::{Question, QuizCategory, ResultCopy};

use super::loader::parse_catalog;
use super::{QuestionProvider, ResultLookup};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// One quiz category with its questions and per-bucket result copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContent {
    #[serde(flatten)]
    pub category: QuizCategory,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub results: BTreeMap<String, ResultCopy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategoryContent>,
}

impl Catalog {
    /// The Food, Animal and Music quizzes bundled with the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        parse_catalog(BUILTIN_CATALOG, "<builtin catalog>")
    }

    pub fn category(&self, title: &str) -> Option<&CategoryContent> {
        self.categories
            .iter()
            .find(|content| content.category.title == title)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl QuestionProvider for Catalog {
    fn categories(&self) -> Vec<QuizCategory> {
        self.categories
            .iter()
            .map(|content| content.category.clone())
            .collect()
    }

    /// Unknown titles fall back to the first category.
    fn questions(&self, category_title: &str) -> Vec<Question> {
        match self.category(category_title) {
            Some(content) => content.questions.clone(),
            None => {
                warn!(category = category_title, "unknown quiz category, using the first one");
                self.categories
                    .first()
                    .map(|content| content.questions.clone())
                    .unwrap_or_default()
            }
        }
    }
}

impl ResultLookup for Catalog {
    fn describe(&self, quiz_title: &str, bucket: &str) -> Option<ResultCopy> {
        self.category(quiz_title)?.results.get(bucket).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectionKind;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        let titles: Vec<String> = catalog.categories().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Food Quiz", "Animal Quiz", "Music Quiz"]);
    }

    #[test]
    fn food_quiz_has_ten_questions_of_every_kind() {
        let catalog = Catalog::builtin().unwrap();
        let questions = catalog.questions("Food Quiz");
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].kind, SelectionKind::Single);
        assert_eq!(questions[1].kind, SelectionKind::Multiple);
        assert_eq!(questions[2].kind, SelectionKind::Ranged);
    }

    #[test]
    fn unknown_category_falls_back_to_first() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.questions("Space Quiz"), catalog.questions("Food Quiz"));
    }

    #[test]
    fn every_bucket_has_copy() {
        let catalog = Catalog::builtin().unwrap();
        for content in &catalog.categories {
            for bucket in ["A", "B", "C", "D"] {
                assert!(
                    catalog.describe(&content.category.title, bucket).is_some(),
                    "{} is missing bucket {}",
                    content.category.title,
                    bucket
                );
            }
        }
    }

    #[test]
    fn lookup_miss_returns_none() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.describe("Space Quiz", "A"), None);
        assert_eq!(catalog.describe("Food Quiz", "Z"), None);
    }
}
