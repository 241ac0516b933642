use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::visibility;

/// Maximum length of question and choice display text.
pub const MAX_TEXT_LEN: usize = 200;

/// Question entity - a poll prompt with a publication timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    /// The moment the question becomes publicly visible.
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a new question with a generated ID.
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Create a question after checking its text, as done for user input.
    pub fn create(question_text: &str, pub_date: DateTime<Utc>) -> Result<Self, DomainError> {
        let text = validate_text("question_text", question_text)?;
        Ok(Self::new(text, pub_date))
    }

    /// Whether the question was published within the last day as of `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        visibility::was_published_recently(self, now)
    }

    /// Whether the question is publicly visible as of `now`.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

/// Trim and bound-check a display string.
pub(crate) fn validate_text(field: &str, text: &str) -> Result<String, DomainError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_create_trims_text() {
        let now = Utc::now();
        let question = Question::create("  What's new?  ", now).unwrap();
        assert_eq!(question.question_text, "What's new?");
        assert_eq!(question.pub_date, now);
    }

    #[test]
    fn test_create_rejects_blank_text() {
        let err = Question::create("   ", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_long_text() {
        let text = "q".repeat(MAX_TEXT_LEN + 1);
        assert!(Question::create(&text, Utc::now()).is_err());
    }

    #[test]
    fn test_is_visible() {
        let now = Utc::now();
        assert!(Question::new("now", now).is_visible(now));
        assert!(Question::new("past", now - TimeDelta::days(1)).is_visible(now));
        assert!(!Question::new("future", now + TimeDelta::seconds(1)).is_visible(now));
    }
}
