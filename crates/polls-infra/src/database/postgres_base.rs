use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait,
};

use polls_core::error::RepoError;
use polls_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    /// Accepts an owned connection or one shared with other repositories.
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

/// Map a failed write to a repository error.
pub(crate) fn write_error(err: DbErr) -> RepoError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") || err_str.contains("foreign key")
    {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

pub(crate) fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(self.db.as_ref()).await.map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    /// Insert, or overwrite every column of the row with the same primary key.
    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();

        let on_conflict = OnConflict::columns(E::PrimaryKey::iter().map(|pk| pk.into_column()))
            .update_columns(E::Column::iter())
            .to_owned();

        let model = E::insert(active_model)
            .on_conflict(on_conflict)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
