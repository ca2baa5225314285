use axum::{Router, routing::get};

use super::controller::get_token;
use crate::state::AppState;

pub fn init_video_router() -> Router<AppState> {
    Router::new().route("/get-token", get(get_token))
}
