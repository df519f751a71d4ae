use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::DomainError;

pub const TITLE_MAX_LEN: usize = 30;
pub const CONTENT_MAX_LEN: usize = 280;

/// Post entity - a blog post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
    /// Defaults to the time of creation.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(user_id: i32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
            tag_ids: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn validated(&self) -> Result<PostFields, DomainError> {
        PostFields::new(&self.title, &self.content, &self.tag_ids, self.created_at)
    }
}

/// Full replacement of a post's editable fields, including its tag set.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
    /// Only an explicit value changes the stored creation time.
    pub created_at: Option<DateTime<Utc>>,
}

impl PostUpdate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag_ids: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn validated(&self) -> Result<PostFields, DomainError> {
        PostFields::new(&self.title, &self.content, &self.tag_ids, self.created_at)
    }
}

/// Trimmed title and content plus the de-duplicated tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub tag_ids: BTreeSet<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PostFields {
    fn new(
        title: &str,
        content: &str,
        tag_ids: &[i32],
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: validate::required("title", title, Some(TITLE_MAX_LEN))?,
            content: validate::required("content", content, Some(CONTENT_MAX_LEN))?,
            tag_ids: tag_ids.iter().copied().collect(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_content_are_required() {
        assert!(NewPost::new(1, "", "World").validated().is_err());
        assert!(NewPost::new(1, "Hello", "  ").validated().is_err());
        assert!(PostUpdate::new("Hello", "").validated().is_err());
    }

    #[test]
    fn content_is_bounded() {
        let content = "c".repeat(CONTENT_MAX_LEN + 1);
        let err = NewPost::new(1, "Hello", content).validated().unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn tag_ids_are_deduplicated() {
        let fields = NewPost::new(1, "Hello", "World")
            .with_tags([3, 1, 3, 2, 1])
            .validated()
            .unwrap();
        assert_eq!(fields.tag_ids.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
