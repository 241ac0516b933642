use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::question::validate_text;
use crate::error::DomainError;

/// Choice entity - one answer option of a question, with its vote tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub votes: i32,
}

impl Choice {
    /// Create a new choice with no votes.
    pub fn new(question_id: Uuid, choice_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
        }
    }

    /// Create a choice after checking its text.
    pub fn create(question_id: Uuid, choice_text: &str) -> Result<Self, DomainError> {
        let text = validate_text("choice_text", choice_text)?;
        Ok(Self::new(question_id, text))
    }

    /// Record one vote.
    pub fn vote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_vote() {
        let mut choice = Choice::new(Uuid::new_v4(), "Not much");
        assert_eq!(choice.votes, 0);

        choice.vote();
        assert_eq!(choice.votes, 1);

        choice.vote();
        assert_eq!(choice.votes, 2);
    }

    #[test]
    fn test_create_rejects_empty_text() {
        assert!(Choice::create(Uuid::new_v4(), "").is_err());
    }
}
