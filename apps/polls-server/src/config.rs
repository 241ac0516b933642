//! Application configuration loaded from environment variables.

use std::env;

use polls_infra::database::DatabaseConfig;

/// Number of questions shown by the index page unless overridden.
pub const DEFAULT_INDEX_LIMIT: usize = 5;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub index_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            index_limit: parse_var("POLLS_INDEX_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_INDEX_LIMIT),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
