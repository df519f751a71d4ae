//! Database connection management and SeaORM stores.

mod associations;
mod base;
mod connections;
mod post_store;
mod tag_store;
mod user_store;

pub mod entity;

pub use associations::SeaOrmTagAssociations;
pub use base::SeaOrmStore;
pub use connections::{DatabaseConfig, connect};
pub use post_store::SeaOrmPostStore;
pub use tag_store::SeaOrmTagStore;
pub use user_store::SeaOrmUserStore;

pub use sea_orm::DbConn;
