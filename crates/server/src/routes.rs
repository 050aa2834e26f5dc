use std::sync::Arc;

use axum::{routing::get, Json, Router};
use service::student::{repository::StudentRepository, StudentService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod hello;
pub mod students;

/// Shared handler state: the student service plus the optional public base URL.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<StudentService<dyn StudentRepository>>,
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(repo: Arc<dyn StudentRepository>, public_url: Option<String>) -> Self {
        Self { students: Arc::new(StudentService::new(repo)), public_url }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/hello", get(hello::hello))
        .route("/health", get(health))
        .route("/students", get(students::list).post(students::create))
        .route("/students/:id", get(students::get))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
