use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::subjects::model::{
    CreateSubjectDto, ErrorResponse, IdQuery, MessageResponse, StudentIdQuery, Subject,
    UpdateSubjectDto,
};
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List the subjects of the caller
///
/// Professors get the subjects they teach, students the subjects of their
/// group. Administrators have no subjects of their own.
#[utoipa::path(
    get,
    path = "/api/list-current-user-subjects",
    responses(
        (status = 200, description = "Subjects of the caller", body = Vec<Subject>),
        (status = 400, description = "Caller is an administrator", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_current_user_subjects(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Subject>>, AppError> {
    if auth_user.is_admin() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Admins don't have any subjects"
        )));
    }

    let subjects = if auth_user.is_professor() {
        SubjectService::list_professor_subjects(&state.db, auth_user.person_id).await?
    } else {
        SubjectService::list_student_subjects(&state.db, auth_user.person_id).await?
    };

    Ok(Json(subjects))
}

/// List all subjects
#[utoipa::path(
    get,
    path = "/api/list-subjects",
    responses(
        (status = 200, description = "All subjects", body = Vec<Subject>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_subjects(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::list_subjects(&state.db).await?;
    Ok(Json(subjects))
}

/// List the subjects in a student's program
#[utoipa::path(
    get,
    path = "/api/list-subjects-of-a-student",
    params(StudentIdQuery),
    responses(
        (status = 200, description = "Subjects of the student's group", body = Vec<Subject>),
        (status = 400, description = "Missing or malformed student_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_subjects_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<StudentIdQuery>,
) -> Result<Json<Vec<Subject>>, AppError> {
    auth_user.require_staff(
        "You do not have administrator or professor privileges to view subjects of students",
    )?;

    let subjects = SubjectService::list_student_subjects(&state.db, query.student_id).await?;
    Ok(Json(subjects))
}

/// Create a subject
#[utoipa::path(
    post,
    path = "/api/add-subject",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Subject already exists", body = ErrorResponse),
        (status = 422, description = "Invalid subject name", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn add_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_user.require_admin("You do not have administrator privileges to add subjects")?;

    SubjectService::create_subject(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Inserting subject successful")),
    ))
}

/// Rename a subject
#[utoipa::path(
    put,
    path = "/api/update-subject",
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 409, description = "Subject already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, auth_user, dto), fields(caller = auth_user.person_id))]
pub async fn update_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to update subjects")?;

    SubjectService::update_subject(&state.db, dto).await?;
    Ok(Json(MessageResponse::new("Update subject successful")))
}

/// Delete a subject
#[utoipa::path(
    delete,
    path = "/api/delete-subject",
    params(IdQuery),
    responses(
        (status = 200, description = "Subject deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Subjects"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_admin("You do not have administrator privileges to delete subjects")?;

    SubjectService::delete_subject(&state.db, query.id).await?;
    Ok(Json(MessageResponse::new("Delete subject successful")))
}
