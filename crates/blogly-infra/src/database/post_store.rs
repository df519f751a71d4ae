//! SeaORM post store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use blogly_core::domain::{NewPost, Post, PostUpdate, Tag};
use blogly_core::error::DomainError;
use blogly_core::ports::PostStore;

use super::associations::{detach_posts, replace_post_tags};
use super::base::{SeaOrmStore, find_model, map_db_err};
use super::entity::{post, tag, user};

/// SeaORM post store.
pub type SeaOrmPostStore = SeaOrmStore<post::Entity>;

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let fields = input.validated()?;
        let now = Utc::now();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if user::Entity::find_by_id(input.user_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .is_none()
        {
            return Err(DomainError::validation(format!(
                "User {} does not exist",
                input.user_id
            )));
        }

        let model = post::ActiveModel {
            id: NotSet,
            user_id: Set(input.user_id),
            title: Set(fields.title),
            content: Set(fields.content),
            created_at: Set(fields.created_at.unwrap_or(now).into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        replace_post_tags(&txn, model.id, &fields.tag_ids).await?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(
            post_id = model.id,
            user_id = model.user_id,
            tags = fields.tag_ids.len(),
            "Post created"
        );
        Ok(model.into())
    }

    async fn get(&self, id: i32) -> Result<Post, DomainError> {
        find_model::<post::Entity, _>(&*self.db, id)
            .await
            .map(Into::into)
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Post>, DomainError> {
        let owner = find_model::<user::Entity, _>(&*self.db, user_id).await?;

        let models = owner
            .find_related(post::Entity)
            .order_by_asc(post::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, changes: PostUpdate) -> Result<Post, DomainError> {
        let fields = changes.validated()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;
        let existing = find_model::<post::Entity, _>(&txn, id).await?;

        let mut active = existing.into_active_model();
        active.title = Set(fields.title);
        active.content = Set(fields.content);
        active.updated_at = Set(Utc::now().into());
        if let Some(created_at) = fields.created_at {
            active.created_at = Set(created_at.into());
        }

        let model = active.update(&txn).await.map_err(map_db_err)?;
        replace_post_tags(&txn, id, &fields.tag_ids).await?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, tags = fields.tag_ids.len(), "Post updated");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        find_model::<post::Entity, _>(&txn, id).await?;

        let detached = detach_posts(&txn, &[id]).await?;
        post::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(post_id = id, associations = detached, "Post deleted");
        Ok(())
    }

    async fn tags(&self, post_id: i32) -> Result<Vec<Tag>, DomainError> {
        let post = find_model::<post::Entity, _>(&*self.db, post_id).await?;

        let models = post
            .find_related(tag::Entity)
            .order_by_asc(tag::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
