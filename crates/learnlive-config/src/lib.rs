//! # LearnLive Config
//!
//! Configuration types for the LearnLive API, loaded from environment
//! variables (a `.env` file is read by the binaries before any of these run).
//!
//! - [`jwt`]: session token secret, cookie name and lifetime
//! - [`database`]: connection string, pool size and per-query time limit
//! - [`video`]: video-room token issuer credentials
//! - [`cors`]: allowed origins
//! - [`server`]: listen port
//!
//! # Example
//!
//! ```ignore
//! use learnlive_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

use std::env;
use std::str::FromStr;

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
pub mod video;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use video::VideoConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Source of configuration values, keyed by variable name.
pub trait Lookup {
    fn get(&self, name: &str) -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Reads from the process environment.
pub struct Env;

impl Lookup for Env {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

pub(crate) fn required(source: &impl Lookup, name: &'static str) -> Result<String, ConfigError> {
    source
        .get(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

pub(crate) fn required_parsed<T: FromStr>(
    source: &impl Lookup,
    name: &'static str,
) -> Result<T, ConfigError> {
    let value = required(source, name)?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

pub(crate) fn optional_parsed<T: FromStr>(
    source: &impl Lookup,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match source.get(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
