//! # Blogly Infrastructure
//!
//! Concrete implementations of the store ports defined in `blogly-core`,
//! backed by SeaORM. Postgres and SQLite URLs are both accepted.
//!
//! Every store takes a shared handle to the connection pool:
//!
//! ```ignore
//! let db = Arc::new(blogly_infra::connect(&config).await?);
//! let users = SeaOrmUserStore::new(Arc::clone(&db));
//! let posts = SeaOrmPostStore::new(db);
//! ```

pub mod database;

pub use database::{
    DatabaseConfig, DbConn, SeaOrmPostStore, SeaOrmTagAssociations, SeaOrmTagStore,
    SeaOrmUserStore, connect,
};
