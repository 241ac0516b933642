use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Choice, Question};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Question repository.
///
/// Returns questions regardless of publication date; visibility is decided
/// by [`crate::visibility`], not by the store.
#[async_trait]
pub trait QuestionRepository: BaseRepository<Question, Uuid> {
    /// Every stored question, in no particular order.
    async fn find_all(&self) -> Result<Vec<Question>, RepoError>;
}

/// Choice repository.
#[async_trait]
pub trait ChoiceRepository: BaseRepository<Choice, Uuid> {
    /// Choices belonging to a question, ordered by choice text then id.
    async fn find_by_question_id(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError>;

    /// Store several choices as one unit: either all are saved or none is.
    async fn save_all(&self, choices: Vec<Choice>) -> Result<Vec<Choice>, RepoError>;

    /// Add one vote to a choice inside the store and return the updated choice.
    ///
    /// Returns `RepoError::NotFound` if the choice does not exist.
    async fn increment_votes(&self, choice_id: Uuid) -> Result<Choice, RepoError>;
}
