use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    delete_grade_and_attendance_of_a_student, insert_grade_and_attendance_of_a_student,
    list_current_user_grades_and_attendance, list_grades_and_attendance_of_a_group,
    list_grades_and_attendance_of_a_student, update_grade_and_attendance_of_a_student,
};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list-current-user-grades-and-attendance",
            get(list_current_user_grades_and_attendance),
        )
        .route(
            "/list-grades-and-attendance-of-a-student",
            get(list_grades_and_attendance_of_a_student),
        )
        .route(
            "/list-grades-and-attendance-of-a-group",
            get(list_grades_and_attendance_of_a_group),
        )
        .route(
            "/insert-grade-and-attendance-of-a-student",
            post(insert_grade_and_attendance_of_a_student),
        )
        .route(
            "/update-grade-and-attendance-of-a-student",
            put(update_grade_and_attendance_of_a_student),
        )
        .route(
            "/delete-grade-and-attendance-of-a-student",
            delete(delete_grade_and_attendance_of_a_student),
        )
}
