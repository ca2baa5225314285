use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::groups::model::{
    CreateGroupDto, ErrorResponse, Group, GroupIdQuery, IdQuery, MessageResponse, Student,
    UpdateGroupDto,
};
use crate::modules::groups::service::GroupService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List study groups
#[utoipa::path(
    get,
    path = "/api/list-groups",
    responses(
        (status = 200, description = "All study groups", body = Vec<Group>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Groups"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_groups(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Group>>, AppError> {
    let groups = GroupService::list_groups(&state.db).await?;
    Ok(Json(groups))
}

/// List the students of a group
#[utoipa::path(
    get,
    path = "/api/list-students-of-a-group",
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Students in the group", body = Vec<Student>),
        (status = 400, description = "Missing or malformed group_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Groups"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_students_of_a_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupIdQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    auth_user.require_staff(
        "You do not have administrator or professor privileges to view students of groups",
    )?;

    let students = GroupService::list_students_of_group(&state.db, query.group_id).await?;
    Ok(Json(students))
}

/// Create a group
#[utoipa::path(
    post,
    path = "/api/add-group",
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Group already exists", body = ErrorResponse),
        (status = 422, description = "Invalid group name", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Groups"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn add_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateGroupDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin("You do not have administrator privileges to add groups")?;

    GroupService::create_group(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Inserting group successful")),
    ))
}

/// Rename a group
#[utoipa::path(
    put,
    path = "/api/update-group",
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator, or the group is reserved", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Group already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Groups"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn update_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateGroupDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to update groups")?;

    GroupService::update_group(&state.db, dto).await?;
    Ok(Json(MessageResponse::new("Update group successful")))
}

/// Delete a group
#[utoipa::path(
    delete,
    path = "/api/delete-group",
    params(IdQuery),
    responses(
        (status = 200, description = "Group deleted", body = MessageResponse),
        (status = 400, description = "Group still has members", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator, or the group is reserved", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Groups"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to delete groups")?;

    GroupService::delete_group(&state.db, query.id).await?;
    Ok(Json(MessageResponse::new("Delete group successful")))
}
