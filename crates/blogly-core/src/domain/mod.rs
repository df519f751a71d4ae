//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;
mod validate;

pub use post::{CONTENT_MAX_LEN, NewPost, Post, PostFields, PostUpdate, TITLE_MAX_LEN};
pub use tag::{NewTag, TAG_NAME_MAX_LEN, Tag};
pub use user::{
    IMAGE_URL_MAX_LEN, NAME_MAX_LEN, NewUser, USERNAME_MAX_LEN, User, UserChanges, UserUpdate,
};
