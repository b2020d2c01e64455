//! Elements the pass screen exposes to the quiz session.
//!
//! Each element has a fixed role. Some are required for the screen to count
//! as a quiz pass page at all; the rest are optional and their updates are
//! skipped when absent.
use crate::error::QuizError;
use crate::models::QuizSubmission;
use std::fmt;

/// Warning style kicks in at or below this share of the time limit.
pub const TIME_WARNING_PERCENT: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementId {
    Counter,
    QuestionProgress,
    TimeProgress,
    SubmitButton,
    Timer,
    Form,
    DurationField,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Counter => "qCounter",
            ElementId::QuestionProgress => "progressBar",
            ElementId::TimeProgress => "timeProgress",
            ElementId::SubmitButton => "submitBtn",
            ElementId::Timer => "timerValue",
            ElementId::Form => "quizForm",
            ElementId::DurationField => "duration_seconds",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextDisplay {
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarStyle {
    #[default]
    Normal,
    Warning,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressBar {
    pub width_percent: f32,
    pub style: BarStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
}

/// Hidden numeric field receiving the elapsed seconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DurationField {
    pub value: Option<u64>,
}

/// Where a submitted form goes.
pub trait FormEndpoint {
    fn submit(&mut self, submission: &QuizSubmission) -> Result<(), QuizError>;
}

pub struct QuizForm {
    pub duration_field: Option<DurationField>,
    endpoint: Box<dyn FormEndpoint>,
}

impl QuizForm {
    /// A form with a duration field.
    pub fn new(endpoint: Box<dyn FormEndpoint>) -> Self {
        Self {
            duration_field: Some(DurationField::default()),
            endpoint,
        }
    }

    pub fn without_duration_field(mut self) -> Self {
        self.duration_field = None;
        self
    }

    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration_field.as_ref().and_then(|f| f.value)
    }

    pub(crate) fn write_duration(&mut self, seconds: u64) {
        if let Some(field) = &mut self.duration_field {
            field.value = Some(seconds);
        }
    }

    pub(crate) fn submit(&mut self, submission: &QuizSubmission) -> Result<(), QuizError> {
        self.endpoint.submit(submission)
    }
}

impl fmt::Debug for QuizForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizForm")
            .field("duration_field", &self.duration_field)
            .finish_non_exhaustive()
    }
}

/// Whatever the screen actually provides; any element may be missing.
#[derive(Debug, Default)]
pub struct PageElements {
    pub counter: Option<TextDisplay>,
    pub question_progress: Option<ProgressBar>,
    pub time_progress: Option<ProgressBar>,
    pub submit_button: Option<SubmitButton>,
    pub timer: Option<TextDisplay>,
    pub form: Option<QuizForm>,
}

impl PageElements {
    /// Every element present.
    pub fn complete(endpoint: Box<dyn FormEndpoint>) -> Self {
        Self {
            counter: Some(TextDisplay::default()),
            question_progress: Some(ProgressBar::default()),
            time_progress: Some(ProgressBar::default()),
            submit_button: Some(SubmitButton::default()),
            timer: Some(TextDisplay::default()),
            form: Some(QuizForm::new(endpoint)),
        }
    }

    pub fn missing_required(&self) -> Vec<ElementId> {
        let mut missing = Vec::new();
        if self.counter.is_none() {
            missing.push(ElementId::Counter);
        }
        if self.question_progress.is_none() {
            missing.push(ElementId::QuestionProgress);
        }
        if self.timer.is_none() {
            missing.push(ElementId::Timer);
        }
        if self.form.is_none() {
            missing.push(ElementId::Form);
        }
        missing
    }
}

/// A screen known to have every required element.
#[derive(Debug)]
pub struct QuizPage {
    pub counter: TextDisplay,
    pub question_progress: ProgressBar,
    pub time_progress: Option<ProgressBar>,
    pub submit_button: Option<SubmitButton>,
    pub timer: TextDisplay,
    pub form: QuizForm,
}

impl QuizPage {
    /// Fails with the missing ids when a required element is absent.
    pub fn bind(elements: PageElements) -> Result<Self, Vec<ElementId>> {
        let missing = elements.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }
        let PageElements {
            counter,
            question_progress,
            time_progress,
            submit_button,
            timer,
            form,
        } = elements;

        match (counter, question_progress, timer, form) {
            (Some(counter), Some(question_progress), Some(timer), Some(form)) => Ok(Self {
                counter,
                question_progress,
                time_progress,
                submit_button,
                timer,
                form,
            }),
            _ => Err(missing),
        }
    }

    /// Whether the time bar has switched to its warning style.
    pub fn time_warning(&self) -> bool {
        self.time_progress
            .as_ref()
            .is_some_and(|bar| bar.style == BarStyle::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullEndpoint;

    impl FormEndpoint for NullEndpoint {
        fn submit(&mut self, _submission: &QuizSubmission) -> Result<(), QuizError> {
            Ok(())
        }
    }

    #[test]
    fn test_bind_complete_page() {
        let elements = PageElements::complete(Box::new(NullEndpoint));
        assert!(elements.missing_required().is_empty());

        let page = QuizPage::bind(elements).expect("complete page binds");
        assert!(page.time_progress.is_some());
        assert!(page.submit_button.is_some());
        assert!(!page.time_warning());
    }

    #[test]
    fn test_bind_fails_without_required_element() {
        let mut elements = PageElements::complete(Box::new(NullEndpoint));
        elements.timer = None;

        assert_eq!(elements.missing_required(), vec![ElementId::Timer]);
        assert_eq!(QuizPage::bind(elements).err(), Some(vec![ElementId::Timer]));
    }

    #[test]
    fn test_bind_tolerates_missing_optional_elements() {
        let mut elements = PageElements::complete(Box::new(NullEndpoint));
        elements.time_progress = None;
        elements.submit_button = None;

        let page = QuizPage::bind(elements).expect("optional elements may be absent");
        assert!(page.time_progress.is_none());
        assert!(!page.time_warning());
    }

    #[test]
    fn test_duration_write_skipped_without_field() {
        let mut form = QuizForm::new(Box::new(NullEndpoint)).without_duration_field();
        form.write_duration(12);
        assert_eq!(form.duration_seconds(), None);

        let mut form = QuizForm::new(Box::new(NullEndpoint));
        form.write_duration(12);
        assert_eq!(form.duration_seconds(), Some(12));
    }

    #[test]
    fn test_element_ids_match_page_contract() {
        assert_eq!(ElementId::DurationField.to_string(), "duration_seconds");
        assert_eq!(ElementId::Form.as_str(), "quizForm");
    }
}
