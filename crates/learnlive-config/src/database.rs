//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `QUERY_TIME_LIMIT`: upper bound for a single statement, in whole seconds (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)

use std::time::Duration;

use crate::{ConfigError, Env, Lookup, optional_parsed, required, required_parsed};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub query_time_limit: Duration,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&Env)
    }

    pub fn from_lookup(source: &impl Lookup) -> Result<Self, ConfigError> {
        let seconds: u64 = required_parsed(source, "QUERY_TIME_LIMIT")?;

        Ok(Self {
            url: required(source, "DATABASE_URL")?,
            query_time_limit: Duration::from_secs(seconds),
            max_connections: optional_parsed(source, "DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::vars;

    #[test]
    fn test_parses_time_limit_in_seconds() {
        let config = DatabaseConfig::from_lookup(&vars(&[
            ("DATABASE_URL", "postgres://localhost/learnlive"),
            ("QUERY_TIME_LIMIT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.query_time_limit, Duration::from_secs(5));
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_time_limit_is_required() {
        let err = DatabaseConfig::from_lookup(&vars(&[(
            "DATABASE_URL",
            "postgres://localhost/learnlive",
        )]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("QUERY_TIME_LIMIT"));
    }

    #[test]
    fn test_time_limit_must_be_integer() {
        let err = DatabaseConfig::from_lookup(&vars(&[
            ("DATABASE_URL", "postgres://localhost/learnlive"),
            ("QUERY_TIME_LIMIT", "1.5"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "QUERY_TIME_LIMIT", .. }));
    }
}
