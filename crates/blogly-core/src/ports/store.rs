use async_trait::async_trait;

use crate::domain::{NewPost, NewTag, NewUser, Post, PostUpdate, Tag, User, UserUpdate};
use crate::error::DomainError;

/// User store. Deleting a user removes the posts it owns.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, input: NewUser) -> Result<User, DomainError>;

    async fn get(&self, id: i32) -> Result<User, DomainError>;

    /// All users in id order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn update(&self, id: i32, changes: UserUpdate) -> Result<User, DomainError>;

    /// Delete the user together with its posts and their tag associations.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Post store. Tag sets given on create and update replace the current set.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, input: NewPost) -> Result<Post, DomainError>;

    async fn get(&self, id: i32) -> Result<Post, DomainError>;

    /// Posts owned by `user_id` in id order.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Post>, DomainError>;

    async fn update(&self, id: i32, changes: PostUpdate) -> Result<Post, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Tags attached to the post, ordered by name.
    async fn tags(&self, post_id: i32) -> Result<Vec<Tag>, DomainError>;
}

/// Tag store. Deleting a tag detaches it from posts but keeps the posts.
#[async_trait]
pub trait TagStore: Send + Sync {
    async fn create(&self, input: NewTag) -> Result<Tag, DomainError>;

    async fn get(&self, id: i32) -> Result<Tag, DomainError>;

    /// All tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, DomainError>;

    async fn rename(&self, id: i32, input: NewTag) -> Result<Tag, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Posts carrying the tag in id order.
    async fn posts(&self, tag_id: i32) -> Result<Vec<Post>, DomainError>;
}

/// Maintains the post/tag many-to-many relation.
#[async_trait]
pub trait TagAssociations: Send + Sync {
    /// Replace every association of `post_id` with `tag_ids`. Duplicates are stored once.
    async fn set_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DomainError>;

    /// Tag ids currently attached to `post_id`, ascending.
    async fn tag_ids(&self, post_id: i32) -> Result<Vec<i32>, DomainError>;
}
