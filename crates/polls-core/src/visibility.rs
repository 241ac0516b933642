//! Publication rules: which questions are visible and which count as recent.
//!
//! Every function here takes `now` explicitly. Callers read their clock once
//! per request and pass the same instant to every check, so a single request
//! never compares against two different times.
//!
//! Boundaries:
//! - `pub_date > now` is not visible and not recent.
//! - `pub_date == now` is visible and recent.
//! - a question exactly [`recency_window`] old is visible but no longer recent.

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::domain::Question;
use crate::error::DomainError;

/// Length of the "published recently" window.
pub fn recency_window() -> TimeDelta {
    TimeDelta::days(1)
}

/// True iff `now - recency_window() < pub_date <= now`.
pub fn was_published_recently(question: &Question, now: DateTime<Utc>) -> bool {
    let age = now.signed_duration_since(question.pub_date);
    age >= TimeDelta::zero() && age < recency_window()
}

/// Visible questions, most recently published first.
///
/// Questions sharing a `pub_date` are ordered by descending id so the output
/// is reproducible regardless of input order.
pub fn list_visible<I>(questions: I, now: DateTime<Utc>) -> Vec<Question>
where
    I: IntoIterator<Item = Question>,
{
    let mut visible: Vec<Question> = questions
        .into_iter()
        .filter(|q| q.is_visible(now))
        .collect();

    visible.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| b.id.cmp(&a.id)));

    visible
}

/// Find `id` among `questions`, treating unpublished questions as missing.
pub fn resolve_visible<I>(
    questions: I,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<Question, DomainError>
where
    I: IntoIterator<Item = Question>,
{
    let found = questions.into_iter().find(|q| q.id == id);
    resolve_visible_one(found, id, now)
}

/// Apply the visibility rule to the result of a single lookup by `id`.
pub fn resolve_visible_one(
    question: Option<Question>,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<Question, DomainError> {
    match question {
        Some(q) if q.id == id && q.is_visible(now) => Ok(q),
        _ => Err(DomainError::question_not_found(id)),
    }
}
