use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::total_grades::model::{
    CreateTotalGradeDto, ErrorResponse, GradeRowQuery, GroupIdQuery, MessageResponse,
    OwnTotalGrade, StudentIdQuery, StudentTotalGrade, UpdateTotalGradeDto,
};
use crate::modules::total_grades::service::TotalGradeService;
use crate::state::AppState;
use crate::utils::auth_helpers::{GradeAction, GradeKind, ensure_can_grade};
use crate::validator::{ValidatedJson, ValidatedQuery};

const STAFF_ONLY: &str =
    "You do not have administrator or professor privileges to view total grades of students";

/// List the caller's total grades
#[utoipa::path(
    get,
    path = "/api/list-current-user-total-grades",
    responses(
        (status = 200, description = "Total grades of the caller", body = Vec<OwnTotalGrade>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_current_user_total_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<OwnTotalGrade>>, AppError> {
    auth_user.require_student("Only students have total grades")?;

    let grades = TotalGradeService::list_own_total_grades(&state.db, auth_user.person_id).await?;
    Ok(Json(grades))
}

/// List a student's total grades
#[utoipa::path(
    get,
    path = "/api/list-total-grades-of-a-student",
    params(StudentIdQuery),
    responses(
        (status = 200, description = "Total grades of the student", body = Vec<StudentTotalGrade>),
        (status = 400, description = "Missing or malformed student_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_total_grades_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<StudentIdQuery>,
) -> Result<Json<Vec<StudentTotalGrade>>, AppError> {
    auth_user.require_staff(STAFF_ONLY)?;

    let grades =
        TotalGradeService::list_student_total_grades(&state.db, query.student_id).await?;
    Ok(Json(grades))
}

/// List total grades of every student in a group
#[utoipa::path(
    get,
    path = "/api/list-total-grades-of-a-group",
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Total grades of the group", body = Vec<StudentTotalGrade>),
        (status = 400, description = "Missing or malformed group_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_total_grades_of_a_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupIdQuery>,
) -> Result<Json<Vec<StudentTotalGrade>>, AppError> {
    auth_user.require_staff(STAFF_ONLY)?;

    let grades = TotalGradeService::list_group_total_grades(&state.db, query.group_id).await?;
    Ok(Json(grades))
}

/// Record the final grade of a student in a subject
#[utoipa::path(
    post,
    path = "/api/insert-total-grade-of-a-student",
    request_body = CreateTotalGradeDto,
    responses(
        (status = 201, description = "Total grade recorded", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse),
        (status = 409, description = "Student already has a grade for this subject", body = ErrorResponse),
        (status = 422, description = "Grade longer than 50 characters", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn insert_total_grade_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTotalGradeDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    ensure_can_grade(
        &state.db,
        &auth_user,
        dto.student_id,
        dto.subject_id,
        GradeAction::Set,
        GradeKind::Total,
    )
    .await?;

    TotalGradeService::insert_total_grade(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Inserting Total Grade Of A Student Successful",
        )),
    ))
}

/// Change a final grade
#[utoipa::path(
    put,
    path = "/api/update-total-grade-of-a-student",
    request_body = UpdateTotalGradeDto,
    responses(
        (status = 200, description = "Total grade updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse),
        (status = 404, description = "Total grade not found", body = ErrorResponse),
        (status = 409, description = "Student already has a grade for this subject", body = ErrorResponse),
        (status = 422, description = "Grade longer than 50 characters", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn update_total_grade_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateTotalGradeDto>,
) -> Result<Json<MessageResponse>, AppError> {
    ensure_can_grade(
        &state.db,
        &auth_user,
        dto.student_id,
        dto.subject_id,
        GradeAction::Update,
        GradeKind::Total,
    )
    .await?;

    TotalGradeService::update_total_grade(&state.db, dto).await?;
    Ok(Json(MessageResponse::new(
        "Updating Total Grade Of A Student Successful",
    )))
}

/// Delete a final grade
#[utoipa::path(
    delete,
    path = "/api/delete-total-grade-of-a-student",
    params(GradeRowQuery),
    responses(
        (status = 200, description = "Total grade deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse),
        (status = 404, description = "Total grade not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Total Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_total_grade_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GradeRowQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    ensure_can_grade(
        &state.db,
        &auth_user,
        query.student_id,
        query.subject_id,
        GradeAction::Delete,
        GradeKind::Total,
    )
    .await?;

    TotalGradeService::delete_total_grade(&state.db, query).await?;
    Ok(Json(MessageResponse::new(
        "Deleting Total Grade Of A Student Successful",
    )))
}
