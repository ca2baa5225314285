use crate::{ConfigError, Env, Lookup, optional_parsed};

#[derive(Clone, Debug)]
pub struct VideoConfig {
    pub api_key: String,
    pub api_secret: String,
    /// Room token lifetime in seconds.
    pub token_ttl: i64,
    pub cookie_name: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: "devkey".to_string(),
            api_secret: "secret".to_string(),
            token_ttl: 24 * 60 * 60,
            cookie_name: "learn_live_ACCESS_TOKEN".to_string(),
        }
    }
}

impl VideoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&Env)
    }

    pub fn from_lookup(source: &impl Lookup) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            api_key: source.get("LIVEKIT_API_KEY").unwrap_or(defaults.api_key),
            api_secret: source
                .get("LIVEKIT_API_SECRET")
                .unwrap_or(defaults.api_secret),
            token_ttl: optional_parsed(source, "ROOM_TOKEN_TTL", defaults.token_ttl)?,
            cookie_name: source
                .get("ROOM_TOKEN_COOKIE")
                .unwrap_or(defaults.cookie_name),
        })
    }
}
