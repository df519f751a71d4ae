//! Post/tag association manager.
//!
//! The free functions run on any connection so post create/update/delete can
//! call them inside their own transaction. [`SeaOrmTagAssociations`] wraps
//! them in a transaction of its own.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use blogly_core::error::DomainError;
use blogly_core::ports::TagAssociations;

use super::base::{SeaOrmStore, find_model, map_db_err};
use super::entity::{post, post_tag, tag};

/// SeaORM association manager.
pub type SeaOrmTagAssociations = SeaOrmStore<post_tag::Entity>;

/// Replace every association of `post_id` with `tag_ids`.
///
/// Fails with a validation error naming the unknown ids before anything is
/// written. The caller owns the transaction and the post existence check.
pub(crate) async fn replace_post_tags<C>(
    conn: &C,
    post_id: i32,
    tag_ids: &BTreeSet<i32>,
) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    ensure_tags_exist(conn, tag_ids).await?;

    post_tag::Entity::delete_many()
        .filter(post_tag::Column::PostId.eq(post_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if !tag_ids.is_empty() {
        let rows = tag_ids.iter().map(|&tag_id| post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        });
        post_tag::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(map_db_err)?;
    }

    tracing::debug!(post_id, tags = ?tag_ids, "Replaced post tags");
    Ok(())
}

/// Remove every association held by any of `post_ids`.
pub(crate) async fn detach_posts<C>(conn: &C, post_ids: &[i32]) -> Result<u64, DomainError>
where
    C: ConnectionTrait,
{
    if post_ids.is_empty() {
        return Ok(0);
    }

    let result = post_tag::Entity::delete_many()
        .filter(post_tag::Column::PostId.is_in(post_ids.iter().copied()))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(result.rows_affected)
}

/// Remove every association of `tag_id`.
pub(crate) async fn detach_tag<C>(conn: &C, tag_id: i32) -> Result<u64, DomainError>
where
    C: ConnectionTrait,
{
    let result = post_tag::Entity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(result.rows_affected)
}

async fn ensure_tags_exist<C>(conn: &C, tag_ids: &BTreeSet<i32>) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    if tag_ids.is_empty() {
        return Ok(());
    }

    let found: BTreeSet<i32> = tag::Entity::find()
        .filter(tag::Column::Id.is_in(tag_ids.iter().copied()))
        .all(conn)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|model| model.id)
        .collect();

    let missing: Vec<String> = tag_ids
        .difference(&found)
        .map(|id| id.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "Unknown tag ids: {}",
            missing.join(", ")
        )))
    }
}

#[async_trait]
impl TagAssociations for SeaOrmTagAssociations {
    async fn set_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DomainError> {
        let tag_ids: BTreeSet<i32> = tag_ids.iter().copied().collect();

        let txn = self.db.begin().await.map_err(map_db_err)?;
        find_model::<post::Entity, _>(&txn, post_id).await?;
        replace_post_tags(&txn, post_id, &tag_ids).await?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }

    async fn tag_ids(&self, post_id: i32) -> Result<Vec<i32>, DomainError> {
        find_model::<post::Entity, _>(&*self.db, post_id).await?;

        let rows = post_tag::Entity::find()
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(post_tag::Column::TagId)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|row| row.tag_id).collect())
    }
}
