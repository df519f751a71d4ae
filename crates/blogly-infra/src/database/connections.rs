use std::time::Duration;

use sea_orm::sqlx::{
    self, ConnectOptions as _,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, RuntimeErr, SqlxSqliteConnector,
};

/// Configuration for the Blogly database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres or SQLite URL.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every SQL statement through `tracing`.
    pub log_queries: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            log_queries: false,
        }
    }

    /// An in-memory SQLite database lives only as long as its single connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite") && self.url.contains(":memory:")
    }
}

/// Open the connection pool described by `config`.
///
/// Callers wrap the handle in an `Arc` to share it between stores.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let conn = if config.is_in_memory() {
        connect_in_memory(config).await?
    } else {
        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(config.log_queries);
        Database::connect(opts).await?
    };

    tracing::info!(
        backend = ?conn.get_database_backend(),
        in_memory = config.is_in_memory(),
        "Database connected"
    );

    Ok(conn)
}

/// A single connection that the pool never reaps. Closing it would discard
/// the database, so neither idle timeout nor max lifetime applies.
async fn connect_in_memory(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let mut options = config
        .url
        .parse::<SqliteConnectOptions>()
        .map_err(sqlx_conn_err)?;
    if !config.log_queries {
        options = options.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(sqlx_conn_err)?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

fn sqlx_conn_err(err: sqlx::Error) -> DbErr {
    DbErr::Conn(RuntimeErr::SqlxError(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(DatabaseConfig::new("sqlite::memory:").is_in_memory());
        assert!(!DatabaseConfig::new("sqlite://blogly.db?mode=rwc").is_in_memory());
        assert!(!DatabaseConfig::new("postgres://localhost/blogly").is_in_memory());
    }

    #[tokio::test]
    async fn in_memory_pool_is_never_recycled() {
        let conn = connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        let pool = conn.get_sqlite_connection_pool();

        assert_eq!(pool.options().get_max_connections(), 1);
        assert_eq!(pool.options().get_idle_timeout(), None);
        assert_eq!(pool.options().get_max_lifetime(), None);
    }
}
