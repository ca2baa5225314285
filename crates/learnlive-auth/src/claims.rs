//! JWT claim structures.

use learnlive_core::AppError;
use serde::{Deserialize, Serialize};

/// Session token claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Person id, as a decimal string.
    pub iss: String,
    /// Human readable identity, see [`session_subject`].
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn person_id(&self) -> Result<i32, AppError> {
        self.iss
            .parse()
            .map_err(|_| AppError::unauthorized("Unauthenticated"))
    }
}

/// Builds the subject claim: `"<last> <first> (<username> ID: <id>)"`.
pub fn session_subject(last_name: &str, first_name: &str, username: &str, id: i32) -> String {
    format!("{last_name} {first_name} ({username} ID: {id})")
}

/// Room token claims understood by LiveKit-compatible servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomClaims {
    /// API key of the issuer.
    pub iss: String,
    /// Participant identity.
    pub sub: String,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_create: bool,
    pub room_join: bool,
    pub room: String,
}
