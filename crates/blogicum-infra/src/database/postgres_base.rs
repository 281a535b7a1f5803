use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IdenStatic,
    IntoActiveModel, Iterable, PrimaryKeyTrait,
};

use blogicum_core::domain::Validate;
use blogicum_core::error::RepoError;
use blogicum_core::ports::BaseRepository;

/// Column written on insert only.
const CREATED_AT: &str = "created_at";

/// Generic PostgreSQL repository implementation.
///
/// Repositories built from the same `Arc<DbConn>` share one pool.
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
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

/// Drop `created_at` from an update so the stored value survives.
fn without_created_at<A>(mut active_model: A) -> A
where
    A: ActiveModelTrait,
{
    for column in <A::Entity as EntityTrait>::Column::iter() {
        if IdenStatic::as_str(&column) == CREATED_AT {
            active_model.not_set(column);
        }
    }
    active_model
}

pub(crate) fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else if err_str.contains("foreign key") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + 'static,
    T: Validate + From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        entity
            .validate()
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        let active_model: E::ActiveModel = entity.into();

        // Unset keys come from a sequence; set keys may be new (uuid) or stored.
        let db = self.db.as_ref();
        let model = if active_model.get_primary_key_value().is_none() {
            active_model.insert(db).await
        } else {
            match without_created_at(active_model.clone()).update(db).await {
                Err(DbErr::RecordNotUpdated) => active_model.insert(db).await,
                other => other,
            }
        }
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
