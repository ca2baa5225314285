//! Session token creation and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use learnlive_config::JwtConfig;
use learnlive_core::AppError;

use crate::claims::Claims;

/// Signs a session token for `person_id`, valid for `jwt_config.session_expiry` seconds.
pub fn create_session_token(
    person_id: i32,
    subject: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        iss: person_id.to_string(),
        sub: subject.to_string(),
        exp: (now + jwt_config.session_expiry) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Checks signature and expiry. Any failure is a 401.
pub fn verify_session_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "session token rejected");
        AppError::unauthorized("Unauthenticated")
    })
}
