//! Domain values to response DTOs.

use blogly_core::domain::{Post, Tag, User};
use blogly_shared::dto::{PostResponse, PostSummary, TagResponse, UserResponse};

pub fn user(user: User) -> UserResponse {
    UserResponse {
        full_name: user.full_name(),
        id: user.id,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        image_url: user.image_url,
    }
}

pub fn tag(tag: Tag) -> TagResponse {
    TagResponse {
        id: tag.id,
        name: tag.name,
    }
}

pub fn post_summary(post: Post) -> PostSummary {
    PostSummary {
        id: post.id,
        user_id: post.user_id,
        title: post.title,
        created_at: post.created_at.to_rfc3339(),
    }
}

pub fn post(post: Post, tags: Vec<Tag>) -> PostResponse {
    PostResponse {
        id: post.id,
        user_id: post.user_id,
        title: post.title,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
        tags: tags.into_iter().map(tag).collect(),
    }
}
