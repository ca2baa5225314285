use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    add_professors_and_subjects_relation, delete_professors_and_subjects_relation,
    list_professors_and_subjects_relations, list_professors_that_have_a_subject,
    list_subjects_of_a_professor, update_professors_and_subjects_relation,
};
use crate::state::AppState;

pub fn init_professor_subjects_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list-professors-and-subjects-relations",
            get(list_professors_and_subjects_relations),
        )
        .route(
            "/list-subjects-of-a-professor",
            get(list_subjects_of_a_professor),
        )
        .route(
            "/list-professors-that-have-a-subject",
            get(list_professors_that_have_a_subject),
        )
        .route(
            "/add-professors-and-subjects-relation",
            post(add_professors_and_subjects_relation),
        )
        .route(
            "/update-professors-and-subjects-relation",
            put(update_professors_and_subjects_relation),
        )
        .route(
            "/delete-professors-and-subjects-relation",
            delete(delete_professors_and_subjects_relation),
        )
}
