use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// How the user answers a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// Exactly one answer.
    Single,
    /// Any number of answers.
    Multiple,
    /// A slider between the first and last answer labels.
    Ranged,
}

impl SelectionKind {
    pub fn instruction(self) -> &'static str {
        match self {
            SelectionKind::Single => "Select one answer",
            SelectionKind::Multiple => "Select all that apply",
            SelectionKind::Ranged => "Move the slider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(rename = "image", default)]
    pub image_ref: String,
    /// Scoring tag shared by many answers across a quiz.
    #[serde(rename = "bucket")]
    pub bucket_id: String,
}

impl Answer {
    pub fn new(text: impl Into<String>, bucket_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_ref: String::new(),
            bucket_id: bucket_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub kind: SelectionKind,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(text: impl Into<String>, kind: SelectionKind, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            kind,
            answers,
        }
    }

    /// Ranged questions carry exactly two answers (the slider endpoints),
    /// every other kind at least one.
    pub fn validate(&self) -> Result<(), QuizError> {
        match self.kind {
            SelectionKind::Ranged if self.answers.len() != 2 => Err(QuizError::RangedEndpoints {
                question: self.text.clone(),
                found: self.answers.len(),
            }),
            SelectionKind::Single | SelectionKind::Multiple if self.answers.is_empty() => {
                Err(QuizError::NoAnswers {
                    question: self.text.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Slider endpoint labels for ranged questions.
    pub fn range_labels(&self) -> (&str, &str) {
        let first = self.answers.first().map(|a| a.text.as_str()).unwrap_or("");
        let last = self.answers.last().map(|a| a.text.as_str()).unwrap_or("");
        (first, last)
    }
}

/// A quiz built for one session. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        let title = title.into();
        Self {
            id: quiz_id(&title),
            title,
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyQuiz(self.title.clone()));
        }
        self.questions.iter().try_for_each(Question::validate)
    }
}

/// "Food Quiz" -> "food_quiz".
pub fn quiz_id(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: String,
}
