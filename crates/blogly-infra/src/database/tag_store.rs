//! SeaORM tag store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use blogly_core::domain::{NewTag, Post, Tag};
use blogly_core::error::DomainError;
use blogly_core::ports::TagStore;

use super::associations::detach_tag;
use super::base::{SeaOrmStore, find_model, map_db_err};
use super::entity::{post, tag};

/// SeaORM tag store.
pub type SeaOrmTagStore = SeaOrmStore<tag::Entity>;

async fn ensure_name_free<C>(conn: &C, name: &str, except: Option<i32>) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let mut query = tag::Entity::find().filter(tag::Column::Name.eq(name));
    if let Some(id) = except {
        query = query.filter(tag::Column::Id.ne(id));
    }

    if query.one(conn).await.map_err(map_db_err)?.is_some() {
        return Err(DomainError::validation(format!(
            "Tag '{name}' already exists"
        )));
    }
    Ok(())
}

#[async_trait]
impl TagStore for SeaOrmTagStore {
    async fn create(&self, input: NewTag) -> Result<Tag, DomainError> {
        let input = input.validated()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;
        ensure_name_free(&txn, &input.name, None).await?;

        let model = tag::ActiveModel {
            id: NotSet,
            name: Set(input.name),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(tag_id = model.id, name = %model.name, "Tag created");
        Ok(model.into())
    }

    async fn get(&self, id: i32) -> Result<Tag, DomainError> {
        find_model::<tag::Entity, _>(&*self.db, id)
            .await
            .map(Into::into)
    }

    async fn list(&self) -> Result<Vec<Tag>, DomainError> {
        let models = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn rename(&self, id: i32, input: NewTag) -> Result<Tag, DomainError> {
        let input = input.validated()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;
        let existing = find_model::<tag::Entity, _>(&txn, id).await?;
        if existing.name == input.name {
            return Ok(existing.into());
        }
        ensure_name_free(&txn, &input.name, Some(id)).await?;

        let mut active = existing.into_active_model();
        active.name = Set(input.name);
        let model = active.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(tag_id = id, name = %model.name, "Tag renamed");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        find_model::<tag::Entity, _>(&txn, id).await?;

        let detached = detach_tag(&txn, id).await?;
        tag::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(tag_id = id, associations = detached, "Tag deleted");
        Ok(())
    }

    async fn posts(&self, tag_id: i32) -> Result<Vec<Post>, DomainError> {
        let tag = find_model::<tag::Entity, _>(&*self.db, tag_id).await?;

        let models = tag
            .find_related(post::Entity)
            .order_by_asc(post::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
