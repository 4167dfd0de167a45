// src/api/mod.rs

pub mod error;
pub mod handler;

pub use error::ApiError;

use crate::models::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::page_handler))
        .route(
            "/api/estimate",
            get(handler::estimate_query_handler).post(handler::estimate_body_handler),
        )
        .route("/api/clubs", get(handler::clubs_handler))
        .route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
