//! Video-room access tokens.
//!
//! The media server validates the HS256 signature with the shared API
//! secret and reads the participant identity and grant from the claims.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use learnlive_config::VideoConfig;
use learnlive_core::AppError;

use crate::claims::{RoomClaims, VideoGrant};

/// Sign a token that lets `identity` create and join `room`.
pub fn generate_room_token(
    config: &VideoConfig,
    identity: &str,
    room: &str,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = RoomClaims {
        iss: config.api_key.clone(),
        sub: identity.to_string(),
        nbf: now,
        exp: now + config.token_ttl,
        video: VideoGrant {
            room_create: true,
            room_join: true,
            room: room.to_string(),
        },
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.api_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign room token: {e}");
        AppError::internal(e)
    })
}
