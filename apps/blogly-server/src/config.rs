//! Application configuration loaded from environment variables.

use blogly_infra::DatabaseConfig;

/// Used when `DATABASE_URL` is not set: a SQLite file next to the binary.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://blogly.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    /// Emit JSON log lines instead of pretty ones.
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut database =
            DatabaseConfig::new(var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()));
        if let Some(max) = parse(&var, "DB_MAX_CONNECTIONS") {
            database.max_connections = max;
        }
        if let Some(min) = parse(&var, "DB_MIN_CONNECTIONS") {
            database.min_connections = min;
        }
        database.log_queries = flag(&var, "DB_LOG_QUERIES").unwrap_or(false);

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&var, "PORT").unwrap_or(8080),
            database,
            auto_migrate: flag(&var, "DB_AUTO_MIGRATE").unwrap_or(true),
            json_logs: var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

fn parse<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|s| s.trim().parse().ok())
}

fn flag(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    var(key).map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
}
