//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Raised both for missing entities and for questions that are not yet
    /// published, so callers cannot tell the two apart.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn question_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "Question",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
