//! # Blogly Shared
//!
//! Wire types exchanged between the HTTP server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
