//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to add a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request to edit a user. Omitted fields stay unchanged; an empty `image_url` removes the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

/// A user's public fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A user together with the posts they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts: Vec<PostSummary>,
}

/// Request to add a post for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to edit a post. The tag list replaces the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to replace the tags of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTagsRequest {
    pub tag_ids: Vec<i32>,
}

/// Post fields without its tags, used in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub created_at: String,
}

/// A post with its tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<TagResponse>,
}

/// Request to add or rename a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

/// A tag together with the posts carrying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDetailResponse {
    pub id: i32,
    pub name: String,
    pub posts: Vec<PostSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_defaults_tags() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"Hello","content":"World"}"#).unwrap();
        assert!(req.tag_ids.is_empty());
        assert!(req.created_at.is_none());
    }

    #[test]
    fn user_detail_flattens_user() {
        let detail = UserDetailResponse {
            user: UserResponse {
                id: 1,
                username: "jdoe".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                full_name: "Jane Doe".into(),
                image_url: None,
            },
            posts: Vec::new(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["username"], "jdoe");
        assert!(json.get("image_url").is_none());
        assert!(json["posts"].as_array().unwrap().is_empty());
    }
}
