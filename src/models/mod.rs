mod question;
mod result;
mod todo;

pub use question::{Answer, Question, Quiz, QuizCategory, SelectionKind, quiz_id};
pub use result::{HistoryEntry, QuizResult, ResultCopy};
pub use todo::{Todo, TodoCategory};
