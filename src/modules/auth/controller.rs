use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::{
    ErrorResponse, LoginRequest, MessageResponse, RoleCheckResponse, SignupRequest,
};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::cookies::client_cookie;
use crate::validator::ValidatedJson;
use learnlive_core::AppError;

/// Create a person account (admins only)
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Signup successful", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 422, description = "Invalid username, password or birthdate", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(caller = auth_user.person_id))]
pub async fn signup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin("You do not have administrator privileges to sign up users")?;

    AuthService::signup(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Signup successful")),
    ))
}

/// Log in and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successfully logged in; the session cookie is set", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let token = AuthService::login(&state.db, dto, &state.jwt_config).await?;

    let cookie = client_cookie(
        state.jwt_config.cookie_name.clone(),
        token,
        state.jwt_config.session_expiry,
    );

    Ok((
        jar.add(cookie),
        Json(MessageResponse::new("Successfully logged in")),
    ))
}

/// Report the caller's role flags
#[utoipa::path(
    get,
    path = "/api/check-is-admin-or-professor",
    responses(
        (status = 200, description = "Role flags of the caller", body = RoleCheckResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Authentication"
)]
#[instrument(skip(auth_user), fields(caller = auth_user.person_id))]
pub async fn check_is_admin_or_professor(auth_user: AuthUser) -> Json<RoleCheckResponse> {
    Json(RoleCheckResponse {
        user_id: auth_user.person_id.to_string(),
        is_admin: auth_user.is_admin(),
        is_professor: auth_user.is_professor(),
    })
}
