//! Quiz definition as handed to the pass screen: title, pass settings and
//! the ordered questions with their answer options.
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnswerOption {
    pub id: i64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Raw pass settings object (`{"totalTime": 90}`), parsed leniently by
    /// [`crate::config::QuizPassConfig`].
    #[serde(default)]
    pub pass: Value,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Questions in display order: by position, then by id.
    pub fn ordered_questions(&self) -> Vec<Question> {
        let mut questions = self.questions.clone();
        questions.sort_by_key(|q| (q.position, q.id));
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, position: i64) -> Question {
        Question {
            id,
            text: format!("Q{id}"),
            position,
            options: vec![AnswerOption {
                id: id * 10,
                text: "yes".to_string(),
            }],
        }
    }

    #[test]
    fn test_ordered_by_position_then_id() {
        let quiz = Quiz {
            id: 1,
            title: "Capitals".to_string(),
            subtitle: None,
            pass: Value::Null,
            questions: vec![question(3, 1), question(2, 1), question(1, 2)],
        };

        let ids: Vec<i64> = quiz.ordered_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
  "id": 7,
  "title": "Rivers",
  "questions": [
    { "id": 1, "text": "Longest river?", "options": [{ "id": 11, "text": "Nile" }] }
  ]
}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();

        assert_eq!(quiz.subtitle, None);
        assert_eq!(quiz.pass, Value::Null);
        assert_eq!(quiz.questions[0].position, 0);
        assert_eq!(quiz.questions[0].options[0].text, "Nile");
    }
}
