//! Maps the action identifiers carried by the screen's buttons to session
//! handlers.
use super::QuizSession;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Prev,
    Next,
    Submit,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Prev => "prev",
            Action::Next => "next",
            Action::Submit => "submit",
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Action::Prev),
            "next" => Ok(Action::Next),
            "submit" => Ok(Action::Submit),
            other => Err(format!("unknown action '{other}'")),
        }
    }
}

pub type Handler = fn(&mut QuizSession);

pub struct ActionTable {
    handlers: HashMap<Action, Handler>,
}

impl Default for ActionTable {
    fn default() -> Self {
        let mut table = Self {
            handlers: HashMap::new(),
        };
        table.register(Action::Prev, QuizSession::previous);
        table.register(Action::Next, QuizSession::next);
        table.register(Action::Submit, |session| {
            session.submit();
        });
        table
    }
}

impl ActionTable {
    pub fn register(&mut self, action: Action, handler: Handler) {
        self.handlers.insert(action, handler);
    }

    /// Runs the handler for `action`. Returns `false` when none is registered.
    pub fn dispatch(&self, session: &mut QuizSession, action: Action) -> bool {
        match self.handlers.get(&action) {
            Some(handler) => {
                handler(session);
                true
            }
            None => false,
        }
    }

    /// Like [`dispatch`](Self::dispatch), for a raw identifier. Unknown
    /// identifiers are ignored.
    pub fn dispatch_id(&self, session: &mut QuizSession, id: &str) -> bool {
        match id.parse::<Action>() {
            Ok(action) => self.dispatch(session, action),
            Err(e) => {
                debug!("ignoring click: {e}");
                false
            }
        }
    }
}
