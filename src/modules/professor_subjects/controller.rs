use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::professor_subjects::model::{
    ErrorResponse, MessageResponse, ProfessorIdQuery, ProfessorSubjectDto, ProfessorWithSubjects,
    SubjectIdQuery, UpdateProfessorSubjectDto,
};
use crate::modules::professor_subjects::service::ProfessorSubjectService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List professors with the subjects they teach
#[utoipa::path(
    get,
    path = "/api/list-professors-and-subjects-relations",
    responses(
        (status = 200, description = "Professors and their subjects", body = Vec<ProfessorWithSubjects>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_professors_and_subjects_relations(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<ProfessorWithSubjects>>, AppError> {
    let relations = ProfessorSubjectService::list_relations(&state.db).await?;
    Ok(Json(relations))
}

/// List the subjects taught by a professor
#[utoipa::path(
    get,
    path = "/api/list-subjects-of-a-professor",
    params(ProfessorIdQuery),
    responses(
        (status = 200, description = "The professor and their subjects", body = Vec<ProfessorWithSubjects>),
        (status = 400, description = "Missing or malformed professor_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_subjects_of_a_professor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ProfessorIdQuery>,
) -> Result<Json<Vec<ProfessorWithSubjects>>, AppError> {
    let relations =
        ProfessorSubjectService::list_by_professor(&state.db, query.professor_id).await?;
    Ok(Json(relations))
}

/// List the professors who teach a subject
#[utoipa::path(
    get,
    path = "/api/list-professors-that-have-a-subject",
    params(SubjectIdQuery),
    responses(
        (status = 200, description = "Professors teaching the subject", body = Vec<ProfessorWithSubjects>),
        (status = 400, description = "Missing or malformed subject_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_professors_that_have_a_subject(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<SubjectIdQuery>,
) -> Result<Json<Vec<ProfessorWithSubjects>>, AppError> {
    let relations = ProfessorSubjectService::list_by_subject(&state.db, query.subject_id).await?;
    Ok(Json(relations))
}

/// Assign a subject to a professor
#[utoipa::path(
    post,
    path = "/api/add-professors-and-subjects-relation",
    request_body = ProfessorSubjectDto,
    responses(
        (status = 201, description = "Relation created", body = MessageResponse),
        (status = 400, description = "Professor or subject does not exist", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn add_professors_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ProfessorSubjectDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to add professor_subject relation",
    )?;

    ProfessorSubjectService::create_relation(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Inserting professor subject relation successful",
        )),
    ))
}

/// Replace one professor-subject pair with another
#[utoipa::path(
    put,
    path = "/api/update-professors-and-subjects-relation",
    request_body = UpdateProfessorSubjectDto,
    responses(
        (status = 200, description = "Relation updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse),
        (status = 409, description = "Relation already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn update_professors_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfessorSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to update professor_subject relation",
    )?;

    ProfessorSubjectService::update_relation(&state.db, dto).await?;
    Ok(Json(MessageResponse::new(
        "Updating professor subject relation successful",
    )))
}

/// Unassign a subject from a professor
#[utoipa::path(
    delete,
    path = "/api/delete-professors-and-subjects-relation",
    params(ProfessorSubjectDto),
    responses(
        (status = 200, description = "Relation deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Relation not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Professor Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_professors_and_subjects_relation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ProfessorSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin(
        "You do not have administrator privileges to delete professor subject relation",
    )?;

    ProfessorSubjectService::delete_relation(&state.db, query).await?;
    Ok(Json(MessageResponse::new(
        "Deleting professor subject relation successful",
    )))
}
