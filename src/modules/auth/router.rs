use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{check_is_admin_or_professor, login, signup};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/check-is-admin-or-professor",
            get(check_is_admin_or_professor),
        )
}
