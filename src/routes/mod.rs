// HTTP routes

mod http;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::dataset::DatasetStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dataset: Arc<DatasetStore>,
    pub(crate) config: AppConfig,
}

pub fn app(dataset: Arc<DatasetStore>, config: AppConfig) -> Router {
    let state = AppState { dataset, config };
    Router::new()
        .route("/", get(|| async { "latency-api is up" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/latency", post(http::latency_handler)) // POST /api/latency
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin; POST, GET, OPTIONS; Content-Type and Authorization headers.
/// Answers every OPTIONS request itself (200, empty body), preflight or not.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
