//! Server configuration

use crate::error::BoxError;

/// Server configuration, read once at start-up
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DB_DRIVER | sqlite | storage driver, only `sqlite` is supported |
/// | DATABASE_URL | sqlite:hr.db | connection URL |
/// | DB_USERNAME | - | accepted, ignored by SQLite |
/// | DB_PASSWORD | - | accepted, ignored by SQLite |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | filter used when `RUST_LOG` is unset |
/// | LOG_DIR | - | enables a daily rolling log file |
#[derive(Debug, Clone)]
pub struct Config {
    pub db_driver: String,
    pub database_url: String,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub db_max_connections: u32,
    pub http_port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Malformed numeric
    /// values are start-up errors, never silent defaults.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let db_driver = var("DB_DRIVER").unwrap_or_else(|| "sqlite".into());
        if !db_driver.eq_ignore_ascii_case("sqlite") {
            return Err(format!("Unsupported DB_DRIVER '{db_driver}', expected 'sqlite'").into());
        }

        let db_max_connections: u32 = match var("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("DB_MAX_CONNECTIONS must be a positive integer, got '{v}'"))?,
            None => 5,
        };
        if db_max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be at least 1".into());
        }

        let http_port: u16 = match var("HTTP_PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("HTTP_PORT must be a port number, got '{v}'"))?,
            None => 8080,
        };
        if http_port == 0 {
            return Err("HTTP_PORT must not be 0".into());
        }

        Ok(Self {
            db_driver: db_driver.to_lowercase(),
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite:hr.db".into()),
            db_username: var("DB_USERNAME").filter(|s| !s.is_empty()),
            db_password: var("DB_PASSWORD").filter(|s| !s.is_empty()),
            db_max_connections,
            http_port,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|s| !s.is_empty()),
        })
    }

    /// Whether credentials were supplied that the driver will not use
    pub fn has_credentials(&self) -> bool {
        self.db_username.is_some() || self.db_password.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_driver: "sqlite".into(),
            database_url: "sqlite:hr.db".into(),
            db_username: None,
            db_password: None,
            db_max_connections: 5,
            http_port: 8080,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
