use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::StudentStore;

use crate::observability;
use crate::openapi::ApiDoc;

pub mod students;

/// State shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<StudentStore>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/students", get(students::list).post(students::create))
        .route("/students/:id", get(students::get));

    ops.merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
