//! Data Transfer Objects - request/response types for the polls API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message shown by the index when no question is visible.
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// Detail shown when a vote names no choice, or a choice of another question.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// Request to create a question together with its choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    /// Defaults to the time of the request when omitted.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Request to vote for one choice of a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub choice: Option<Uuid>,
}

/// One entry of the index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub id: Uuid,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

/// A choice as shown on the detail page, without its tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub id: Uuid,
    pub choice_text: String,
}

/// A choice as shown on the results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResult {
    pub id: Uuid,
    pub choice_text: String,
    pub votes: i32,
}

/// Detail page: the question and the choices a voter can pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub id: Uuid,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<ChoiceResponse>,
}

/// Results page: the question and the vote count of every choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResults {
    pub id: Uuid,
    pub question_text: String,
    pub choices: Vec<ChoiceResult>,
    pub total_votes: i64,
}
