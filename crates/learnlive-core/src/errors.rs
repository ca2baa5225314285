use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

/// Constructors are named after the status they carry. Client-facing
/// messages take plain strings; causes that may be internal take any error.
impl AppError {
    pub fn new(status: StatusCode, err: impl Into<Error>) -> Self {
        Self {
            status,
            error: err.into(),
        }
    }

    fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, anyhow!(message.into()))
    }

    pub fn internal(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// A driver failure. Same status as [`AppError::internal`], kept apart so
    /// call sites say where the failure came from.
    pub fn database(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn not_found(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::message(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::message(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::message(StatusCode::CONFLICT, message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::message(StatusCode::GATEWAY_TIMEOUT, message)
    }

    /// Whether the message is safe to show to the caller.
    fn is_exposed(&self) -> bool {
        !self.status.is_server_error() || self.status == StatusCode::GATEWAY_TIMEOUT
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.is_exposed() {
            self.error.to_string()
        } else {
            tracing::error!(error = ?self.error, status = %self.status, "request failed");
            "Internal server error".to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(AppError::forbidden("no").status, StatusCode::FORBIDDEN);
        assert_eq!(AppError::unauthorized("no").status, StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::conflict("dup").status, StatusCode::CONFLICT);
        assert_eq!(
            AppError::gateway_timeout("slow").status,
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::bad_request(anyhow!("bad")).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_client_error_message_is_exposed() {
        let response = AppError::conflict("Group already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        assert!(!AppError::internal(anyhow!("pool exhausted")).is_exposed());
        assert!(AppError::gateway_timeout("slow").is_exposed());
        assert!(AppError::not_found(anyhow!("Room not found")).is_exposed());
    }

    #[test]
    fn test_foreign_errors_become_internal() {
        let err: AppError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
