//! Errors raised while reading or checking settings.

use thiserror::Error;

/// Failure to produce an [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A setting that was read but cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout: {got}s (allowed 1-{max})")]
    InvalidTimeout { got: u64, max: u64 },

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections ({min}) exceeds max_connections ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("Pool size {got} exceeds maximum allowed ({limit})")]
    PoolSizeTooLarge { got: u32, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_setting() {
        let missing = ConfigError::from(ValidationError::MissingRequired("DATABASE__URL"));
        assert_eq!(
            missing.to_string(),
            "Validation failed: Required configuration missing: DATABASE__URL"
        );
        assert_eq!(
            ValidationError::InvalidTimeout { got: 0, max: 300 }.to_string(),
            "Invalid request timeout: 0s (allowed 1-300)"
        );
        assert_eq!(
            ValidationError::PoolSizeTooLarge { got: 150, limit: 100 }.to_string(),
            "Pool size 150 exceeds maximum allowed (100)"
        );
    }
}
