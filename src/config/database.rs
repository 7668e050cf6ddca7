//! PostgreSQL connection settings.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on pool size accepted by [`DatabaseConfig::validate`].
pub const MAX_POOL_SIZE: u32 = 100;

const POSTGRES_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

/// Pool settings; present only when sessions are persisted in PostgreSQL.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "DatabaseConfig::default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    #[serde(default = "DatabaseConfig::default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Apply embedded migrations before serving
    #[serde(default = "DatabaseConfig::default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    fn default_min_connections() -> u32 {
        1
    }

    fn default_max_connections() -> u32 {
        10
    }

    fn default_acquire_timeout_secs() -> u64 {
        30
    }

    fn default_run_migrations() -> bool {
        true
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !POSTGRES_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize {
                min: self.min_connections,
                max: self.max_connections,
            });
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge {
                got: self.max_connections,
                limit: MAX_POOL_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: Self::default_min_connections(),
            max_connections: Self::default_max_connections(),
            acquire_timeout_secs: Self::default_acquire_timeout_secs(),
            run_migrations: Self::default_run_migrations(),
        }
    }
}
