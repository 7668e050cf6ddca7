//! Settings read from the process environment.
//!
//! Every key lives under the `WORKOUT_TRACKER` prefix with `__` between
//! sections, so `WORKOUT_TRACKER__SERVER__PORT=3000` sets `server.port`.
//! A `.env` file in the working directory is loaded first when present.
//!
//! ```no_run
//! use workout_tracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("settings");
//! config.validate().expect("usable settings");
//! println!("listening on {}", config.server.bind_address());
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

const ENV_PREFIX: &str = "WORKOUT_TRACKER";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Without a `database` section sessions live in process memory.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the prefixed environment variables.
    ///
    /// Only parsing happens here; call [`AppConfig::validate`] before use.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        match &self.database {
            Some(database) => database.validate(),
            None => Ok(()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "WORKOUT_TRACKER__DATABASE__URL",
        "WORKOUT_TRACKER__DATABASE__MAX_CONNECTIONS",
        "WORKOUT_TRACKER__SERVER__PORT",
        "WORKOUT_TRACKER__SERVER__ENVIRONMENT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_uses_in_memory_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.database.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn database_section_is_read_from_prefixed_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORKOUT_TRACKER__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("WORKOUT_TRACKER__DATABASE__MAX_CONNECTIONS", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/test");
        assert_eq!(database.max_connections, 4);
        assert!(database.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_postgres_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORKOUT_TRACKER__DATABASE__URL", "mysql://localhost/test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORKOUT_TRACKER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn server_port_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORKOUT_TRACKER__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
