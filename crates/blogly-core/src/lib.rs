//! # Blogly Core
//!
//! The domain layer of Blogly: users, their posts, and the tags attached to posts.
//! This crate contains the entity types, input validation and the store ports.
//! It has no storage or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
