use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::DomainError;

pub const TAG_NAME_MAX_LEN: usize = 30;

/// Tag entity - a label attached to any number of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Input for creating or renaming a tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
}

impl NewTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validated(&self) -> Result<Self, DomainError> {
        Ok(Self {
            name: validate::required("name", &self.name, Some(TAG_NAME_MAX_LEN))?,
        })
    }
}
