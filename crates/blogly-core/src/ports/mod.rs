//! Ports - trait definitions for the storage layer.
//! Infrastructure provides the implementations; callers depend only on these traits.

mod store;

pub use store::{PostStore, TagAssociations, TagStore, UserStore};
