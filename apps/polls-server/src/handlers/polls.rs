//! Poll handlers: index, detail, results, vote and question creation.
//!
//! Each handler reads the clock once and uses that instant for every
//! visibility check it makes.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::{list_visible, resolve_visible_one};
use polls_shared::ApiResponse;
use polls_shared::dto::{
    ChoiceResponse, ChoiceResult, CreateQuestionRequest, NO_CHOICE_SELECTED, NO_POLLS_MESSAGE,
    QuestionDetail, QuestionResults, QuestionSummary, VoteRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /api/polls - the latest published questions.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let now = state.clock.now();
    let questions = state.questions.find_all().await?;

    let latest: Vec<QuestionSummary> = list_visible(questions, now)
        .into_iter()
        .take(state.index_limit)
        .map(|q| summary(q, now))
        .collect();

    if latest.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(latest, NO_POLLS_MESSAGE)));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(latest)))
}

/// POST /api/polls
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateQuestionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let pub_date = req.pub_date.unwrap_or_else(|| state.clock.now());

    // Validate everything before the first write.
    let question = Question::create(&req.question_text, pub_date)?;
    let choices = req
        .choices
        .iter()
        .map(|text| Choice::create(question.id, text))
        .collect::<Result<Vec<_>, _>>()?;

    let question = state.questions.save(question).await?;
    if let Err(err) = state.choices.save_all(choices).await {
        // No half-created polls: drop the question when its choices can't be stored.
        tracing::warn!(question_id = %question.id, error = %err, "Choice insert failed");
        if let Err(cleanup) = state.questions.delete(question.id).await {
            tracing::error!(
                question_id = %question.id,
                error = %cleanup,
                "Question cleanup failed"
            );
        }
        return Err(err.into());
    }
    let choices = state.choices.find_by_question_id(question.id).await?;

    tracing::info!(
        question_id = %question.id,
        pub_date = %question.pub_date,
        choices = choices.len(),
        "Question created"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(detail_of(question, choices))))
}

/// GET /api/polls/{question_id}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let (question, choices) = load_visible(&state, &path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(detail_of(question, choices))))
}

/// GET /api/polls/{question_id}/results
pub async fn results(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let (question, choices) = load_visible(&state, &path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(results_of(question, choices))))
}

/// POST /api/polls/{question_id}/vote
///
/// A missing or unparsable body counts as "no choice selected".
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request_id: RequestId,
    body: Option<web::Json<VoteRequest>>,
) -> AppResult<HttpResponse> {
    let (question, choices) = load_visible(&state, &path).await?;

    let selected = body
        .and_then(|b| b.into_inner().choice)
        .and_then(|id| choices.iter().find(|c| c.id == id))
        .ok_or_else(|| AppError::BadRequest(NO_CHOICE_SELECTED.to_string()))?;

    let updated = state.choices.increment_votes(selected.id).await?;
    tracing::info!(
        request_id = %request_id.as_str(),
        question_id = %question.id,
        choice_id = %updated.id,
        votes = updated.votes,
        "Vote recorded"
    );

    let choices = state.choices.find_by_question_id(question.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(results_of(question, choices))))
}

/// Resolve a path id to a published question and its choices.
///
/// Unparsable ids, missing questions and unpublished questions all yield 404.
async fn load_visible(state: &AppState, raw_id: &str) -> AppResult<(Question, Vec<Choice>)> {
    let now = state.clock.now();
    let id = Uuid::parse_str(raw_id)
        .map_err(|_| AppError::NotFound(format!("Question with id {} not found", raw_id)))?;

    let found = state.questions.find_by_id(id).await?;
    let question = resolve_visible_one(found, id, now)?;
    let choices = state.choices.find_by_question_id(question.id).await?;

    Ok((question, choices))
}

fn summary(question: Question, now: DateTime<Utc>) -> QuestionSummary {
    QuestionSummary {
        was_published_recently: question.was_published_recently(now),
        id: question.id,
        question_text: question.question_text,
        pub_date: question.pub_date,
    }
}

fn detail_of(question: Question, choices: Vec<Choice>) -> QuestionDetail {
    QuestionDetail {
        id: question.id,
        question_text: question.question_text,
        pub_date: question.pub_date,
        choices: choices
            .into_iter()
            .map(|c| ChoiceResponse {
                id: c.id,
                choice_text: c.choice_text,
            })
            .collect(),
    }
}

fn results_of(question: Question, choices: Vec<Choice>) -> QuestionResults {
    QuestionResults {
        id: question.id,
        question_text: question.question_text,
        total_votes: choices.iter().map(|c| i64::from(c.votes)).sum(),
        choices: choices
            .into_iter()
            .map(|c| ChoiceResult {
                id: c.id,
                choice_text: c.choice_text,
                votes: c.votes,
            })
            .collect(),
    }
}
