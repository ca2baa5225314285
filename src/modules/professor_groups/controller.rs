use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::professor_groups::model::{
    ErrorResponse, MessageResponse, ProfessorIdQuery, ProfessorGroupDto, ProfessorWithGroups,
    GroupIdQuery, UpdateProfessorGroupDto,
};
use crate::modules::professor_groups::service::ProfessorGroupService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List professors with the groups they teach
#[utoipa::path(
    get,
    path = "/api/list-professors-and-groups-relations",
    responses(
        (status = 200, description = "Professors and their groups", body = Vec<ProfessorWithGroups>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_professors_and_groups_relations(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<ProfessorWithGroups>>, AppError> {
    let relations = ProfessorGroupService::list_relations(&state.db).await?;
    Ok(Json(relations))
}

/// List the groups taught by a professor
#[utoipa::path(
    get,
    path = "/api/list-groups-of-a-professor",
    params(ProfessorIdQuery),
    responses(
        (status = 200, description = "The professor and their groups", body = Vec<ProfessorWithGroups>),
        (status = 400, description = "Missing or malformed professor_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_groups_of_a_professor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ProfessorIdQuery>,
) -> Result<Json<Vec<ProfessorWithGroups>>, AppError> {
    let relations =
        ProfessorGroupService::list_by_professor(&state.db, query.professor_id).await?;
    Ok(Json(relations))
}

/// List the professors who teach a group
#[utoipa::path(
    get,
    path = "/api/list-professors-that-have-a-group",
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Professors teaching the group", body = Vec<ProfessorWithGroups>),
        (status = 400, description = "Missing or malformed group_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_professors_that_have_a_group(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupIdQuery>,
) -> Result<Json<Vec<ProfessorWithGroups>>, AppError> {
    let relations = ProfessorGroupService::list_by_group(&state.db, query.group_id).await?;
    Ok(Json(relations))
}

/// Assign a group to a professor
#[utoipa::path(
    post,
    path = "/api/add-professors-and-groups-relation",
    request_body = ProfessorGroupDto,
    responses(
        (status = 201, description = "Relation created", body = MessageResponse),
        (status = 400, description = "Professor or group does not exist", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn add_professors_and_groups_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ProfessorGroupDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to add professor_group relation",
    )?;

    ProfessorGroupService::create_relation(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Inserting professor group relation successful",
        )),
    ))
}

/// Replace one professor-group pair with another
#[utoipa::path(
    put,
    path = "/api/update-professors-and-groups-relation",
    request_body = UpdateProfessorGroupDto,
    responses(
        (status = 200, description = "Relation updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn update_professors_and_groups_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfessorGroupDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to update professor_group relation",
    )?;

    ProfessorGroupService::update_relation(&state.db, dto).await?;
    Ok(Json(MessageResponse::new(
        "Updating professor group relation successful",
    )))
}

/// Unassign a group from a professor
#[utoipa::path(
    delete,
    path = "/api/delete-professors-and-groups-relation",
    params(ProfessorGroupDto),
    responses(
        (status = 200, description = "Relation deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Groups"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_professors_and_groups_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ProfessorGroupDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to delete professor group relation",
    )?;

    ProfessorGroupService::delete_relation(&state.db, query).await?;
    Ok(Json(MessageResponse::new(
        "Deleting professor group relation successful",
    )))
}
