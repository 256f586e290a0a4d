use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display copy for one result bucket of a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCopy {
    pub title: String,
    pub description: String,
}

impl ResultCopy {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Used when a quiz/bucket pair has no mapped copy.
    pub fn placeholder() -> Self {
        Self::new(
            "Your Result",
            "Your answers have been recorded. This result mapping can be expanded for additional quizzes.",
        )
    }
}

/// Outcome of a finished quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub quiz_title: String,
    pub result_title: String,
    pub result_description: String,
    pub dominant_bucket: String,
}

impl QuizResult {
    pub fn headline(&self) -> String {
        format!("Your {} personality is...", self.quiz_title.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub quiz_title: String,
    pub result_title: String,
    pub completed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_result(result: &QuizResult, completed_at: DateTime<Utc>) -> Self {
        Self {
            quiz_title: result.quiz_title.clone(),
            result_title: result.result_title.clone(),
            completed_at,
        }
    }
}
