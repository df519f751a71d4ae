//! SeaORM entities for the `users`, `posts`, `tags` and `post_tags` tables.

pub mod post;
pub mod post_tag;
pub mod tag;
pub mod user;
