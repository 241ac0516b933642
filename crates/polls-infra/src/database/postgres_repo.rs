//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::error::RepoError;
use polls_core::ports::{ChoiceRepository, QuestionRepository};

use super::entity::choice::{self, Entity as ChoiceEntity};
use super::entity::question::Entity as QuestionEntity;
use super::postgres_base::{PostgresBaseRepository, query_error, write_error};

/// PostgreSQL question repository.
pub type PostgresQuestionRepository = PostgresBaseRepository<QuestionEntity>;

/// PostgreSQL choice repository.
pub type PostgresChoiceRepository = PostgresBaseRepository<ChoiceEntity>;

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepoError> {
        let result = QuestionEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ChoiceRepository for PostgresChoiceRepository {
    async fn find_by_question_id(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError> {
        let result = ChoiceEntity::find()
            .filter(choice::Column::QuestionId.eq(question_id))
            .order_by_asc(choice::Column::ChoiceText)
            .order_by_asc(choice::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save_all(&self, choices: Vec<Choice>) -> Result<Vec<Choice>, RepoError> {
        if choices.is_empty() {
            return Ok(choices);
        }

        // One multi-row INSERT, so a failure leaves none of the rows behind.
        ChoiceEntity::insert_many(choices.iter().cloned().map(choice::ActiveModel::from))
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(write_error)?;

        Ok(choices)
    }

    async fn increment_votes(&self, choice_id: Uuid) -> Result<Choice, RepoError> {
        tracing::debug!(%choice_id, "Incrementing vote count");

        // votes = votes + 1 in a single statement so concurrent votes are not lost
        let result = ChoiceEntity::update_many()
            .col_expr(choice::Column::Votes, Expr::col(choice::Column::Votes).add(1))
            .filter(choice::Column::Id.eq(choice_id))
            .exec(self.db.as_ref())
            .await
            .map_err(write_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        ChoiceEntity::find_by_id(choice_id)
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }
}
