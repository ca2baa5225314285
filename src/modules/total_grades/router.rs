use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    delete_total_grade_of_a_student, insert_total_grade_of_a_student,
    list_current_user_total_grades, list_total_grades_of_a_group, list_total_grades_of_a_student,
    update_total_grade_of_a_student,
};
use crate::state::AppState;

pub fn init_total_grades_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list-current-user-total-grades",
            get(list_current_user_total_grades),
        )
        .route(
            "/list-total-grades-of-a-student",
            get(list_total_grades_of_a_student),
        )
        .route(
            "/list-total-grades-of-a-group",
            get(list_total_grades_of_a_group),
        )
        .route(
            "/insert-total-grade-of-a-student",
            post(insert_total_grade_of_a_student),
        )
        .route(
            "/update-total-grade-of-a-student",
            put(update_total_grade_of_a_student),
        )
        .route(
            "/delete-total-grade-of-a-student",
            delete(delete_total_grade_of_a_student),
        )
}
