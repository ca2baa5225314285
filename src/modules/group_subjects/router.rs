use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    add_groups_and_subjects_relation, delete_groups_and_subjects_relation,
    list_groups_and_subjects_relations, list_groups_that_have_a_subject,
    list_subjects_of_a_group, update_groups_and_subjects_relation,
};
use crate::state::AppState;

pub fn init_group_subjects_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list-groups-and-subjects-relations",
            get(list_groups_and_subjects_relations),
        )
        .route("/list-subjects-of-a-group", get(list_subjects_of_a_group))
        .route(
            "/list-groups-that-have-a-subject",
            get(list_groups_that_have_a_subject),
        )
        .route(
            "/add-groups-and-subjects-relation",
            post(add_groups_and_subjects_relation),
        )
        .route(
            "/update-groups-and-subjects-relation",
            put(update_groups_and_subjects_relation),
        )
        .route(
            "/delete-groups-and-subjects-relation",
            delete(delete_groups_and_subjects_relation),
        )
}
