use axum::{Json, extract::State, http::StatusCode};
use learnlive_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::grades::model::{
    CreateGradeDto, ErrorResponse, GradeRowQuery, GroupIdQuery, MessageResponse, OwnGrade,
    OwnGradesQuery, StudentGrade, StudentGradesQuery, UpdateGradeDto,
};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::utils::auth_helpers::{GradeAction, GradeKind, ensure_can_grade};
use crate::validator::{ValidatedJson, ValidatedQuery};

const STAFF_ONLY: &str =
    "You do not have administrator or professor privileges to view grades of students";

/// List the caller's grades and attendance in one subject
#[utoipa::path(
    get,
    path = "/api/list-current-user-grades-and-attendance",
    params(OwnGradesQuery),
    responses(
        (status = 200, description = "Grades of the caller", body = Vec<OwnGrade>),
        (status = 400, description = "Missing or malformed subject_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_current_user_grades_and_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<OwnGradesQuery>,
) -> Result<Json<Vec<OwnGrade>>, AppError> {
    auth_user.require_student("Only students have grades")?;

    let grades =
        GradeService::list_own_grades(&state.db, auth_user.person_id, query.subject_id).await?;
    Ok(Json(grades))
}

/// List a student's grades and attendance in one subject
#[utoipa::path(
    get,
    path = "/api/list-grades-and-attendance-of-a-student",
    params(StudentGradesQuery),
    responses(
        (status = 200, description = "Grades of the student", body = Vec<StudentGrade>),
        (status = 400, description = "Missing or malformed query parameters", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_grades_and_attendance_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<StudentGradesQuery>,
) -> Result<Json<Vec<StudentGrade>>, AppError> {
    auth_user.require_staff(STAFF_ONLY)?;

    let grades =
        GradeService::list_student_grades(&state.db, query.student_id, query.subject_id).await?;
    Ok(Json(grades))
}

/// List grades and attendance of every student in a group
#[utoipa::path(
    get,
    path = "/api/list-grades-and-attendance-of-a-group",
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Grades of the group", body = Vec<StudentGrade>),
        (status = 400, description = "Missing or malformed group_id", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is neither administrator nor professor", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn list_grades_and_attendance_of_a_group(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<GroupIdQuery>,
) -> Result<Json<Vec<StudentGrade>>, AppError> {
    auth_user.require_staff(STAFF_ONLY)?;

    let grades = GradeService::list_group_grades(&state.db, query.group_id).await?;
    Ok(Json(grades))
}

/// Record a grade and attendance for a student
///
/// A non-zero grade always marks the student as present.
#[utoipa::path(
    post,
    path = "/api/insert-grade-and-attendance-of-a-student",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn insert_grade_and_attendance_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    ensure_can_grade(
        &state.db,
        &auth_user,
        dto.student_id,
        dto.subject_id,
        GradeAction::Set,
        GradeKind::Lesson,
    )
    .await?;

    GradeService::insert_grade(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Inserting Grade And Attendance Of A Student Successful",
        )),
    ))
}

/// Change a recorded grade
#[utoipa::path(
    put,
    path = "/api/update-grade-and-attendance-of-a-student",
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn update_grade_and_attendance_of_a_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Json<MessageResponse>, AppError> {
    ensure_can_grade(
        &state.db,
        &auth_user,
        dto.student_id,
        dto.subject_id,
        GradeAction::Update,
        GradeKind::Lesson,
    )
    .await?;

    GradeService::update_grade(&state.db, dto).await?;
    Ok(Json(MessageResponse::new(
        "Updating Grade And Attendance Of A Student Successful",
    )))
}

/// Delete a recorded grade
#[utoipa::path(
    delete,
    path = "/api/delete-grade-and-attendance-of-a-student",
    params(GradeRowQuery),
    responses(
        (status = 200, description = "Grade deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Caller may not grade this student in this subject", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, auth_user), fields(caller = auth_user.person_id))]
pub async fn delete_grade_and_attendance_of_a_student(
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
        GradeKind::Lesson,
    )
    .await?;

    GradeService::delete_grade(&state.db, query).await?;
    Ok(Json(MessageResponse::new(
        "Deleting Grade And Attendance Of A Student Successful",
    )))
}
