use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};

use blogly_core::error::{DomainError, RepoError};

use super::entity::{post, tag, user};

/// Generic SeaORM store over one entity.
///
/// The concrete stores are type aliases of this struct with their port
/// implemented per entity. All of them share the injected connection.
pub struct SeaOrmStore<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmStore<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for SeaOrmStore<E>
where
    E: EntityTrait,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

/// Name used in `NotFound` errors.
pub(crate) trait EntityLabel {
    const LABEL: &'static str;
}

impl EntityLabel for user::Entity {
    const LABEL: &'static str = "User";
}

impl EntityLabel for post::Entity {
    const LABEL: &'static str = "Post";
}

impl EntityLabel for tag::Entity {
    const LABEL: &'static str = "Tag";
}

/// Fetch a row by integer primary key through `conn`, which may be a transaction.
pub(crate) async fn find_model<E, C>(conn: &C, id: i32) -> Result<E::Model, DomainError>
where
    E: EntityTrait + EntityLabel,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(E::LABEL, id))
}

/// Translate a SeaORM error into the domain error space.
///
/// Constraint violations are caller mistakes and surface as validation errors;
/// everything else is a storage failure.
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            return DomainError::validation(format!("Duplicate value: {detail}"));
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return DomainError::validation(format!("Invalid reference: {detail}"));
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()).into(),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()).into(),
        other => RepoError::Query(other.to_string()).into(),
    }
}
