use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::rooms::model::{
    CreateRoomDto, ErrorResponse, IdQuery, MessageResponse, Room, SubjectIdQuery, SubjectRoom,
    UpdateRoomDto,
};
use crate::modules::rooms::service::RoomService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List all rooms with their subject names
#[utoipa::path(
    get,
    path = "/api/list-rooms",
    responses(
        (status = 200, description = "All rooms", body = Vec<SubjectRoom>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<SubjectRoom>>, AppError> {
    let rooms = RoomService::list_rooms(&state.db).await?;
    Ok(Json(rooms))
}

/// List the rooms of a subject
#[utoipa::path(
    get,
    path = "/api/list-rooms-of-a-subject",
    params(SubjectIdQuery),
    responses(
        (status = 200, description = "Rooms of the subject", body = Vec<Room>),
        (status = 400, description = "Missing or malformed subject_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_rooms_of_a_subject(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<SubjectIdQuery>,
) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = RoomService::list_rooms_of_subject(&state.db, query.subject_id).await?;
    Ok(Json(rooms))
}

/// Create a room for a subject
#[utoipa::path(
    post,
    path = "/api/add-room",
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = MessageResponse),
        (status = 400, description = "Subject does not exist", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Room name already used for this subject", body = ErrorResponse),
        (status = 422, description = "Invalid room name", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn add_room(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRoomDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin("You do not have administrator privileges to add rooms")?;

    RoomService::create_room(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Inserting room successful")),
    ))
}

/// Update a room
#[utoipa::path(
    put,
    path = "/api/update-room",
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 409, description = "Room name already used for this subject", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn update_room(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateRoomDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to update room")?;

    RoomService::update_room(&state.db, dto).await?;
    Ok(Json(MessageResponse::new("Update room successful")))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/api/delete-room",
    params(IdQuery),
    responses(
        (status = 200, description = "Room deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_room(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to delete room")?;

    RoomService::delete_room(&state.db, query.id).await?;
    Ok(Json(MessageResponse::new("Delete room successful")))
}
