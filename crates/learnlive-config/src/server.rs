use crate::{ConfigError, Env, Lookup, required_parsed};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&Env)
    }

    pub fn from_lookup(source: &impl Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            port: required_parsed(source, "PORT")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
