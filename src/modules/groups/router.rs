use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{
    add_group, delete_group, list_groups, list_students_of_a_group, update_group,
};
use crate::state::AppState;

pub fn init_groups_router() -> Router<AppState> {
    Router::new()
        .route("/list-groups", get(list_groups))
        .route("/list-students-of-a-group", get(list_students_of_a_group))
        .route("/add-group", post(add_group))
        .route("/update-group", put(update_group))
        .route("/delete-group", delete(delete_group))
}
