//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostStore, TagAssociations, TagStore, UserStore};
use blogly_infra::{
    DbConn, SeaOrmPostStore, SeaOrmTagAssociations, SeaOrmTagStore, SeaOrmUserStore,
};

/// Shared application state. Every store wraps the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub tags: Arc<dyn TagStore>,
    pub tag_links: Arc<dyn TagAssociations>,
}

impl AppState {
    /// Build the stores over an open connection.
    pub fn new(db: DbConn) -> Self {
        tracing::info!("Application state initialized");
        let db = Arc::new(db);

        Self {
            users: Arc::new(SeaOrmUserStore::new(Arc::clone(&db))),
            posts: Arc::new(SeaOrmPostStore::new(Arc::clone(&db))),
            tags: Arc::new(SeaOrmTagStore::new(Arc::clone(&db))),
            tag_links: Arc::new(SeaOrmTagAssociations::new(db)),
        }
    }
}
