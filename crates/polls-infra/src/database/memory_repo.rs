//! In-memory repositories - used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::error::RepoError;
use polls_core::ports::{BaseRepository, ChoiceRepository, QuestionRepository};

/// Questions kept in a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    store: RwLock<HashMap<Uuid, Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Question, Uuid> for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, question: Question) -> Result<Question, RepoError> {
        let mut store = self.store.write().await;
        store.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }
}

/// Choices kept in a HashMap behind an async RwLock.
#[derive(Default)]
pub struct InMemoryChoiceRepository {
    store: RwLock<HashMap<Uuid, Choice>>,
}

impl InMemoryChoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Choice, Uuid> for InMemoryChoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Choice>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, choice: Choice) -> Result<Choice, RepoError> {
        let mut store = self.store.write().await;
        store.insert(choice.id, choice.clone());
        Ok(choice)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryChoiceRepository {
    async fn find_by_question_id(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError> {
        let store = self.store.read().await;
        let mut choices: Vec<Choice> = store
            .values()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect();

        // Same order as the PostgreSQL repository.
        choices.sort_by(|a, b| {
            a.choice_text
                .cmp(&b.choice_text)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(choices)
    }

    async fn save_all(&self, choices: Vec<Choice>) -> Result<Vec<Choice>, RepoError> {
        let mut store = self.store.write().await;
        store.extend(choices.iter().map(|c| (c.id, c.clone())));
        Ok(choices)
    }

    async fn increment_votes(&self, choice_id: Uuid) -> Result<Choice, RepoError> {
        let mut store = self.store.write().await;
        let choice = store.get_mut(&choice_id).ok_or(RepoError::NotFound)?;
        choice.vote();
        Ok(choice.clone())
    }
}
