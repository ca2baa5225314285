use crate::{ConfigError, Env, Lookup, optional_parsed, required};

/// Thirty days.
pub const DEFAULT_SESSION_EXPIRY: i64 = 30 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HMAC secret used to sign session tokens (`SECRET_KEY`).
    pub secret: String,
    /// Name of the cookie carrying the session token (`JWT_NAME`).
    pub cookie_name: String,
    /// Session lifetime in seconds (`JWT_EXPIRY`).
    pub session_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&Env)
    }

    pub fn from_lookup(source: &impl Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            secret: required(source, "SECRET_KEY")?,
            cookie_name: required(source, "JWT_NAME")?,
            session_expiry: optional_parsed(source, "JWT_EXPIRY", DEFAULT_SESSION_EXPIRY)?,
        })
    }
}
