//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | DATABASE_PATH | nyam.db | SQLite database file |
//! | ENVIRONMENT | development | development \| production |
//! | LOG_LEVEL | info | tracing filter level |

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Running environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "nyam.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override selected values, typically from tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
