pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod page;
pub mod session;

pub use config::QuizPassConfig;
pub use error::QuizError;
pub use models::{AnswerOption, Question, QuestionCard, Quiz, QuizSubmission};
pub use page::{FormEndpoint, PageElements, QuizPage};
pub use session::{Action, ActionTable, Clock, QuizSession, TickOutcome, Ticker};
