//! JSON input/output for the pass screen.
//! Reads quiz definitions and writes submitted forms.

use crate::error::QuizError;
use crate::models::{Quiz, QuizSubmission};
use crate::page::FormEndpoint;
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Loads a quiz definition from a JSON file.
/// Fails if the quiz has no questions or a question has no options.
pub fn import_quiz(path: impl AsRef<Path>) -> Result<Quiz, QuizError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let quiz = parse_quiz(&contents)?;
    info!(
        "quiz '{}' ({} questions) loaded from '{}'",
        quiz.title,
        quiz.questions.len(),
        path.display()
    );
    Ok(quiz)
}

/// Parses and validates a quiz definition.
pub fn parse_quiz(json: &str) -> Result<Quiz, QuizError> {
    let quiz: Quiz = serde_json::from_str(json)?;

    if quiz.questions.is_empty() {
        return Err(QuizError::NoQuestions(quiz.id));
    }
    if let Some(question) = quiz.questions.iter().find(|q| q.options.is_empty()) {
        return Err(QuizError::NoOptions(question.id));
    }
    Ok(quiz)
}

/// Writes a submission as pretty-printed JSON.
pub fn export_submission_to_path(
    submission: &QuizSubmission,
    path: impl AsRef<Path>,
) -> Result<(), QuizError> {
    let json_string = serde_json::to_string_pretty(submission)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Form endpoint that stores each submission as `quiz-<id>-result.json`
/// in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileEndpoint {
    dir: PathBuf,
}

impl JsonFileEndpoint {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, quiz_id: i64) -> PathBuf {
        self.dir.join(format!("quiz-{quiz_id}-result.json"))
    }
}

impl FormEndpoint for JsonFileEndpoint {
    fn submit(&mut self, submission: &QuizSubmission) -> Result<(), QuizError> {
        let path = self.path_for(submission.quiz_id);
        export_submission_to_path(submission, &path)?;
        info!("answers written to '{}'", path.display());
        Ok(())
    }
}
