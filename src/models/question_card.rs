//! One question panel on the pass screen, with its answer inputs.
use super::{AnswerOption, Question};

/// Effect of clicking an answer option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Changed,
    /// The option was already checked.
    Unchanged,
    Invalid,
}

#[derive(Clone, Debug)]
pub struct QuestionCard {
    pub question: Question,
    pub active: bool,
    selected: Option<usize>,
}

impl QuestionCard {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            active: false,
            selected: None,
        }
    }

    /// Checks the given option. Out-of-range indices leave the card unchanged.
    pub fn select(&mut self, option_index: usize) -> Selection {
        if option_index >= self.question.options.len() {
            Selection::Invalid
        } else if self.selected == Some(option_index) {
            Selection::Unchanged
        } else {
            self.selected = Some(option_index);
            Selection::Changed
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&AnswerOption> {
        self.selected.and_then(|i| self.question.options.get(i))
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}
