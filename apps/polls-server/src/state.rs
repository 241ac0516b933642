//! Application state - shared across all handlers.

use std::sync::Arc;

use polls_core::ports::{ChoiceRepository, Clock, QuestionRepository};
use polls_infra::clock::SystemClock;
use polls_infra::database::{InMemoryChoiceRepository, InMemoryQuestionRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub choices: Arc<dyn ChoiceRepository>,
    pub clock: Arc<dyn Clock>,
    /// Maximum number of questions on the index page.
    pub index_limit: usize,
}

type Repositories = (Arc<dyn QuestionRepository>, Arc<dyn ChoiceRepository>);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let state = match connect_repositories(config).await {
            Some((questions, choices)) => Self {
                questions,
                choices,
                clock,
                index_limit: config.index_limit,
            },
            None => Self::in_memory(clock, config.index_limit),
        };

        tracing::info!(index_limit = state.index_limit, "Application state initialized");
        state
    }

    /// State backed by the in-memory repositories.
    pub fn in_memory(clock: Arc<dyn Clock>, index_limit: usize) -> Self {
        Self {
            questions: Arc::new(InMemoryQuestionRepository::new()),
            choices: Arc::new(InMemoryChoiceRepository::new()),
            clock,
            index_limit,
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect_repositories(config: &AppConfig) -> Option<Repositories> {
    use polls_infra::database::{PostgresChoiceRepository, PostgresQuestionRepository, connect};

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return None;
    };

    match connect(db_config).await {
        Ok(conn) => {
            let conn = Arc::new(conn);
            Some((
                Arc::new(PostgresQuestionRepository::new(Arc::clone(&conn))),
                Arc::new(PostgresChoiceRepository::new(conn)),
            ))
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            None
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn connect_repositories(_config: &AppConfig) -> Option<Repositories> {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    None
}
