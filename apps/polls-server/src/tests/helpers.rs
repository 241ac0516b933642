//! Helpers for handler integration tests against the in-memory store.

use std::sync::Arc;

use actix_web::{App, http::header, test, web};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::error::RepoError;
use polls_core::ports::{BaseRepository, ChoiceRepository};
use polls_infra::clock::FixedClock;
use polls_infra::database::InMemoryChoiceRepository;

use crate::config::DEFAULT_INDEX_LIMIT;
use crate::handlers::configure_routes;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// The instant every test treats as "now".
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn test_state() -> AppState {
    AppState::in_memory(Arc::new(FixedClock::new(now())), DEFAULT_INDEX_LIMIT)
}

/// In-memory state whose choice store rejects every batch insert.
pub fn test_state_with_failing_choice_writes() -> AppState {
    AppState {
        choices: Arc::new(RejectingChoiceRepository::default()),
        ..test_state()
    }
}

/// Choice store that serves reads and single saves but fails `save_all`.
#[derive(Default)]
struct RejectingChoiceRepository {
    inner: InMemoryChoiceRepository,
}

#[async_trait]
impl BaseRepository<Choice, Uuid> for RejectingChoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Choice>, RepoError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, choice: Choice) -> Result<Choice, RepoError> {
        self.inner.save(choice).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl ChoiceRepository for RejectingChoiceRepository {
    async fn find_by_question_id(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError> {
        self.inner.find_by_question_id(question_id).await
    }

    async fn save_all(&self, _choices: Vec<Choice>) -> Result<Vec<Choice>, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn increment_votes(&self, choice_id: Uuid) -> Result<Choice, RepoError> {
        self.inner.increment_votes(choice_id).await
    }
}

/// Store a question published `days` from now (negative for the past).
pub async fn create_question(state: &AppState, question_text: &str, days: i64) -> Question {
    let question = Question::new(question_text, now() + TimeDelta::days(days));
    state.questions.save(question).await.unwrap()
}

pub async fn create_choice(state: &AppState, question_id: Uuid, choice_text: &str) -> Choice {
    state
        .choices
        .save(Choice::new(question_id, choice_text))
        .await
        .unwrap()
}

async fn call<R>(state: &AppState, req: test::TestRequest) -> (u16, R)
where
    R: DeserializeOwned,
{
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let res = test::call_service(&app, req.to_request()).await;

    let status = res.status().as_u16();
    let body = test::read_body(res).await;
    let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "response deserialization failed. response: {} status: {}",
            String::from_utf8_lossy(&body),
            status
        )
    });

    (status, json_body)
}

/// Helper for HTTP GET integration tests
pub async fn test_get<R>(state: &AppState, route: &str) -> (u16, R)
where
    R: DeserializeOwned,
{
    call(state, test::TestRequest::get().uri(route)).await
}

/// Helper for HTTP POST integration tests
pub async fn test_post<T, R>(state: &AppState, route: &str, params: &T) -> (u16, R)
where
    T: Serialize,
    R: DeserializeOwned,
{
    call(state, test::TestRequest::post().uri(route).set_json(params)).await
}

/// Helper for HTTP POST integration tests that need a hand-built body.
///
/// `None` sends the request with no body and no content type.
pub async fn test_post_raw<R>(
    state: &AppState,
    route: &str,
    body: Option<(&str, &str)>,
) -> (u16, R)
where
    R: DeserializeOwned,
{
    let mut req = test::TestRequest::post().uri(route);
    if let Some((content_type, payload)) = body {
        req = req
            .insert_header((header::CONTENT_TYPE, content_type.to_owned()))
            .set_payload(payload.to_owned());
    }
    call(state, req).await
}
