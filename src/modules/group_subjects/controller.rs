use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::group_subjects::model::{
    ErrorResponse, GroupIdQuery, GroupSubject, GroupSubjectDto, MessageResponse, SubjectIdQuery,
    UpdateGroupSubjectDto,
};
use crate::modules::group_subjects::service::GroupSubjectService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List every group-subject pair
#[utoipa::path(
    get,
    path = "/api/list-groups-and-subjects-relations",
    responses(
        (status = 200, description = "All group-subject relations", body = Vec<GroupSubject>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_groups_and_subjects_relations(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<GroupSubject>>, AppError> {
    let relations = GroupSubjectService::list_relations(&state.db).await?;
    Ok(Json(relations))
}

/// List the subjects studied by a group
#[utoipa::path(
    get,
    path = "/api/list-subjects-of-a-group",
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Relations of the group", body = Vec<GroupSubject>),
        (status = 400, description = "Missing or malformed group_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_subjects_of_a_group(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupIdQuery>,
) -> Result<Json<Vec<GroupSubject>>, AppError> {
    let relations = GroupSubjectService::list_by_group(&state.db, query.group_id).await?;
    Ok(Json(relations))
}

/// List the groups that study a subject
#[utoipa::path(
    get,
    path = "/api/list-groups-that-have-a-subject",
    params(SubjectIdQuery),
    responses(
        (status = 200, description = "Relations of the subject", body = Vec<GroupSubject>),
        (status = 400, description = "Missing or malformed subject_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_groups_that_have_a_subject(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<SubjectIdQuery>,
) -> Result<Json<Vec<GroupSubject>>, AppError> {
    let relations = GroupSubjectService::list_by_subject(&state.db, query.subject_id).await?;
    Ok(Json(relations))
}

/// Add a subject to a group's program
#[utoipa::path(
    post,
    path = "/api/add-groups-and-subjects-relation",
    request_body = GroupSubjectDto,
    responses(
        (status = 201, description = "Relation created", body = MessageResponse),
        (status = 400, description = "Group or subject does not exist", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn add_groups_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<GroupSubjectDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to add group_subject relation",
    )?;

    GroupSubjectService::create_relation(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Inserting group subject relation successful",
        )),
    ))
}

/// Replace one group-subject pair with another
#[utoipa::path(
    put,
    path = "/api/update-groups-and-subjects-relation",
    request_body = UpdateGroupSubjectDto,
    responses(
        (status = 200, description = "Relation updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn update_groups_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateGroupSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to update group_subject relation",
    )?;

    GroupSubjectService::update_relation(&state.db, dto).await?;
    Ok(Json(MessageResponse::new(
        "Updating group subject relation successful",
    )))
}

/// Remove a subject from a group's program
#[utoipa::path(
    delete,
    path = "/api/delete-groups-and-subjects-relation",
    params(GroupSubjectDto),
    responses(
        (status = 200, description = "Relation deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Group Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_groups_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to delete group_subject relation",
    )?;

    GroupSubjectService::delete_relation(&state.db, query).await?;
    Ok(Json(MessageResponse::new(
        "Deleting group subject relation successful",
    )))
}
