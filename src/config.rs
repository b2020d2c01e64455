//! Pass screen settings.
//!
//! The settings object comes from outside (the quiz file) and is read
//! leniently: anything that is not a usable number of seconds falls back to
//! the default time limit.
use serde_json::Value;

pub const DEFAULT_TOTAL_TIME: u32 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizPassConfig {
    /// Time limit for the whole quiz, in seconds.
    pub total_time: u32,
}

impl Default for QuizPassConfig {
    fn default() -> Self {
        Self {
            total_time: DEFAULT_TOTAL_TIME,
        }
    }
}

impl QuizPassConfig {
    pub fn from_value(value: &Value) -> Self {
        let total_time = value
            .get("totalTime")
            .and_then(parse_seconds)
            .unwrap_or(DEFAULT_TOTAL_TIME);
        Self { total_time }
    }
}

/// Whole seconds from a JSON number or numeric string. The countdown runs
/// in whole seconds, so fractions are truncated first; a result of zero
/// (including values below one second) counts as unset.
fn parse_seconds(value: &Value) -> Option<u32> {
    let seconds = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !seconds.is_finite() || seconds < 0.0 || seconds > f64::from(u32::MAX) {
        return None;
    }
    match seconds.trunc() as u32 {
        0 => None,
        whole => Some(whole),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_numeric_total_time() {
        let config = QuizPassConfig::from_value(&json!({ "totalTime": 120 }));
        assert_eq!(config.total_time, 120);
    }

    #[test]
    fn test_accepts_numeric_string() {
        let config = QuizPassConfig::from_value(&json!({ "totalTime": " 45 " }));
        assert_eq!(config.total_time, 45);
    }

    #[test]
    fn test_truncates_fraction() {
        let config = QuizPassConfig::from_value(&json!({ "totalTime": 30.9 }));
        assert_eq!(config.total_time, 30);
    }

    #[test]
    fn test_sub_second_limit_truncates_to_unset() {
        let config = QuizPassConfig::from_value(&json!({ "totalTime": 0.5 }));
        assert_eq!(config.total_time, 90);

        let config = QuizPassConfig::from_value(&json!({ "totalTime": "1.2" }));
        assert_eq!(config.total_time, 1);
    }

    #[test]
    fn test_defaults_when_absent_or_invalid() {
        for value in [
            json!(null),
            json!({}),
            json!({ "totalTime": "soon" }),
            json!({ "totalTime": 0 }),
            json!({ "totalTime": -5 }),
            json!({ "totalTime": true }),
            json!({ "totalTime": [60] }),
        ] {
            assert_eq!(QuizPassConfig::from_value(&value).total_time, 90, "{value}");
        }
    }
}
