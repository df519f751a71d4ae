use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::DomainError;

pub const USERNAME_MAX_LEN: usize = 30;
pub const NAME_MAX_LEN: usize = 15;
pub const IMAGE_URL_MAX_LEN: usize = 500;

/// User entity - a person who owns posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Return a trimmed copy, or the first field that fails validation.
    pub fn validated(&self) -> Result<Self, DomainError> {
        Ok(Self {
            username: validate::required("username", &self.username, Some(USERNAME_MAX_LEN))?,
            first_name: validate::required("first_name", &self.first_name, Some(NAME_MAX_LEN))?,
            last_name: validate::required("last_name", &self.last_name, Some(NAME_MAX_LEN))?,
            image_url: validate::optional(
                "image_url",
                self.image_url.as_deref(),
                Some(IMAGE_URL_MAX_LEN),
            )?,
        })
    }
}

/// Partial update of a user. `None` leaves a field unchanged.
///
/// `image_url: Some("")` clears the stored image.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

/// A validated [`UserUpdate`]. `image_url: Some(None)` means "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl UserUpdate {
    pub fn validated(&self) -> Result<UserChanges, DomainError> {
        Ok(UserChanges {
            username: self
                .username
                .as_deref()
                .map(|v| validate::required("username", v, Some(USERNAME_MAX_LEN)))
                .transpose()?,
            first_name: self
                .first_name
                .as_deref()
                .map(|v| validate::required("first_name", v, Some(NAME_MAX_LEN)))
                .transpose()?,
            last_name: self
                .last_name
                .as_deref()
                .map(|v| validate::required("last_name", v, Some(NAME_MAX_LEN)))
                .transpose()?,
            image_url: self
                .image_url
                .as_deref()
                .map(|v| validate::optional("image_url", Some(v), Some(IMAGE_URL_MAX_LEN)))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_requires_names() {
        let err = NewUser::new("jdoe", "", "Doe").validated().unwrap_err();
        assert!(err.to_string().contains("first_name"));

        let err = NewUser::new("jdoe", "Jane", " ").validated().unwrap_err();
        assert!(err.to_string().contains("last_name"));
    }

    #[test]
    fn new_user_bounds_lengths() {
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(NewUser::new("jdoe", long, "Doe").validated().is_err());
        let long = "u".repeat(USERNAME_MAX_LEN + 1);
        assert!(NewUser::new(long, "Jane", "Doe").validated().is_err());
    }

    #[test]
    fn blank_image_url_is_dropped() {
        let user = NewUser::new(" jdoe ", "Jane", "Doe")
            .with_image_url("  ")
            .validated()
            .unwrap();
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.image_url, None);
    }

    #[test]
    fn update_distinguishes_clear_from_unchanged() {
        let changes = UserUpdate {
            image_url: Some(String::new()),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(changes.image_url, Some(None));
        assert_eq!(changes.first_name, None);

        let changes = UserUpdate::default().validated().unwrap();
        assert_eq!(changes, UserChanges::default());
    }

    #[test]
    fn update_rejects_blank_name() {
        let update = UserUpdate {
            first_name: Some("  ".into()),
            ..Default::default()
        };
        assert!(update.validated().unwrap_err().is_validation());
    }

    #[test]
    fn full_name_joins_parts() {
        let user = User {
            id: 1,
            username: "jdoe".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            image_url: None,
        };
        assert_eq!(user.full_name(), "Jane Doe");
    }
}
