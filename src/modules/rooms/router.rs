use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::controller::{add_room, delete_room, list_rooms, list_rooms_of_a_subject, update_room};
use crate::state::AppState;

pub fn init_rooms_router() -> Router<AppState> {
    Router::new()
        .route("/list-rooms", get(list_rooms))
        .route("/list-rooms-of-a-subject", get(list_rooms_of_a_subject))
        .route("/add-room", post(add_room))
        .route("/update-room", put(update_room))
        .route("/delete-room", delete(delete_room))
}
