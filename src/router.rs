use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::grades::router::init_grades_router;
use crate::modules::group_subjects::router::init_group_subjects_router;
use crate::modules::groups::router::init_groups_router;
use crate::modules::professor_groups::router::init_professor_groups_router;
use crate::modules::professor_subjects::router::init_professor_subjects_router;
use crate::modules::rooms::router::init_rooms_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::total_grades::router::init_total_grades_router;
use crate::modules::video::router::init_video_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .merge(init_subjects_router())
                .merge(init_rooms_router())
                .merge(init_groups_router())
                .merge(init_group_subjects_router())
                .merge(init_professor_subjects_router())
                .merge(init_professor_groups_router())
                .merge(init_grades_router())
                .merge(init_total_grades_router())
                .merge(init_video_router())
                .method_not_allowed_fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found" })),
    )
}
