//! Payload carried by the quiz form when it is submitted.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub quiz_id: i64,
    /// question id -> chosen option id; unanswered questions are omitted
    pub answers: BTreeMap<i64, i64>,
    pub duration_seconds: Option<u64>,
}
