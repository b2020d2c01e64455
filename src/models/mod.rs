pub mod question_card;
pub mod quiz;
pub mod submission;

pub use question_card::{QuestionCard, Selection};
pub use quiz::{AnswerOption, Question, Quiz};
pub use submission::QuizSubmission;
