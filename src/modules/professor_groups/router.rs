use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    add_professors_and_groups_relation, delete_professors_and_groups_relation,
    list_professors_and_groups_relations, list_professors_that_have_a_group,
    list_groups_of_a_professor, update_professors_and_groups_relation,
};
use crate::state::AppState;

pub fn init_professor_groups_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list-professors-and-groups-relations",
            get(list_professors_and_groups_relations),
        )
        .route(
            "/list-groups-of-a-professor",
            get(list_groups_of_a_professor),
        )
        .route(
            "/list-professors-that-have-a-group",
            get(list_professors_that_have_a_group),
        )
        .route(
            "/add-professors-and-groups-relation",
            post(add_professors_and_groups_relation),
        )
        .route(
            "/update-professors-and-groups-relation",
            put(update_professors_and_groups_relation),
        )
        .route(
            "/delete-professors-and-groups-relation",
            delete(delete_professors_and_groups_relation),
        )
}
