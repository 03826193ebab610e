use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::utils::app_error::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, after loading a
    /// `.env` file if there is one.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Cannot load .env file : {e}");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::Configuration("DATABASE_URL is not set".to_string()))?;

        let mut config = Self::new(url);

        if let Some(max_connections) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = match max_connections.parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(AppError::Configuration(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got `{max_connections}`"
                    )));
                }
                Ok(n) => n,
            };
        }

        Ok(config)
    }
}

/// Opens a pool and brings the schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!(
        "Connected to database with up to {} connections",
        config.max_connections
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn url_is_required() {
        let err = DatabaseConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));

        let err = DatabaseConfig::from_lookup(lookup(&[("DATABASE_URL", "")])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn defaults() {
        let config =
            DatabaseConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/social")]))
                .unwrap();
        assert_eq!(config.url, "postgres://localhost/social");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn max_connections_override() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/social"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 12);

        for bad in ["0", "-1", "many"] {
            let err = DatabaseConfig::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://localhost/social"),
                ("DATABASE_MAX_CONNECTIONS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, AppError::Configuration(_)));
        }
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let err = connect(&DatabaseConfig::new("not a database url"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)), "{err}");
    }
}
