use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::video::model::{ErrorResponse, RoomIdQuery, RoomTokenResponse};
use crate::modules::video::service::VideoService;
use crate::state::AppState;
use crate::utils::cookies::client_cookie;
use crate::validator::ValidatedQuery;

/// Get a token for joining a video room
///
/// The token is also set as a cookie so the browser client can hand it to
/// the media server.
#[utoipa::path(
    get,
    path = "/api/get-token",
    params(RoomIdQuery),
    responses(
        (status = 200, description = "Room token issued", body = RoomTokenResponse),
        (status = 400, description = "Missing or malformed room_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Video"
)]
#[instrument(skip(state, jar, auth_user), fields(caller = auth_user.person_id))]
pub async fn get_token(
    State(state): State<AppState>,
    jar: CookieJar,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<RoomIdQuery>,
) -> Result<(CookieJar, Json<RoomTokenResponse>), AppError> {
    let issued = VideoService::issue_room_token(
        &state.db,
        &state.video_config,
        query.room_id,
        auth_user.subject(),
    )
    .await?;

    let cookie = client_cookie(
        state.video_config.cookie_name.clone(),
        issued.token.clone(),
        state.video_config.token_ttl,
    );

    Ok((jar.add(cookie), Json(issued)))
}
