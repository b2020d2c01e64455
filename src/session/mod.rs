pub mod actions;
pub mod clock;
pub mod quiz_session;
pub mod timer;

pub use actions::{Action, ActionTable};
pub use clock::Clock;
pub use quiz_session::{QuizSession, SessionStatus, SubmitReason, TickOutcome};
pub use timer::Ticker;
