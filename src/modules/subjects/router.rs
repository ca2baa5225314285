use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    add_subject, delete_subject, list_current_user_subjects, list_subjects,
    list_subjects_of_a_student, update_subject,
};
use crate::state::AppState;

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/list-current-user-subjects", get(list_current_user_subjects))
        .route("/list-subjects", get(list_subjects))
        .route("/list-subjects-of-a-student", get(list_subjects_of_a_student))
        .route("/add-subject", post(add_subject))
        .route("/update-subject", put(update_subject))
        .route("/delete-subject", delete(delete_subject))
}
