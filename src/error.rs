use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("quiz {0} has no questions")]
    NoQuestions(i64),
    #[error("question {0} has no answer options")]
    NoOptions(i64),
}
