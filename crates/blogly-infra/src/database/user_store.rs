//! SeaORM user store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use blogly_core::domain::{NewUser, User, UserUpdate};
use blogly_core::error::DomainError;
use blogly_core::ports::UserStore;

use super::associations::detach_posts;
use super::base::{SeaOrmStore, find_model, map_db_err};
use super::entity::{post, user};

/// SeaORM user store.
pub type SeaOrmUserStore = SeaOrmStore<user::Entity>;

/// Fail if `username` belongs to a user other than `except`.
async fn ensure_username_free<C>(
    conn: &C,
    username: &str,
    except: Option<i32>,
) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let mut query = user::Entity::find().filter(user::Column::Username.eq(username));
    if let Some(id) = except {
        query = query.filter(user::Column::Id.ne(id));
    }

    match query.one(conn).await.map_err(map_db_err)? {
        Some(_) => Err(DomainError::validation(format!(
            "Username '{username}' is already taken"
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        let input = input.validated()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;
        ensure_username_free(&txn, &input.username, None).await?;

        let model = user::ActiveModel {
            id: NotSet,
            username: Set(input.username),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            image_url: Set(input.image_url),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(user_id = model.id, "User created");
        Ok(model.into())
    }

    async fn get(&self, id: i32) -> Result<User, DomainError> {
        find_model::<user::Entity, _>(&*self.db, id)
            .await
            .map(Into::into)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, changes: UserUpdate) -> Result<User, DomainError> {
        let changes = changes.validated()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;
        let existing = find_model::<user::Entity, _>(&txn, id).await?;

        if let Some(username) = &changes.username {
            ensure_username_free(&txn, username, Some(id)).await?;
        }

        let mut active = existing.clone().into_active_model();
        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = Set(image_url);
        }

        let model = if active.is_changed() {
            active.update(&txn).await.map_err(map_db_err)?
        } else {
            existing
        };

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(user_id = id, "User updated");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        find_model::<user::Entity, _>(&txn, id).await?;

        let post_ids: Vec<i32> = post::Entity::find()
            .filter(post::Column::UserId.eq(id))
            .all(&txn)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| model.id)
            .collect();

        let detached = detach_posts(&txn, &post_ids).await?;

        post::Entity::delete_many()
            .filter(post::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(
            user_id = id,
            posts = post_ids.len(),
            associations = detached,
            "User deleted"
        );
        Ok(())
    }
}
