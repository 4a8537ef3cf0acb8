//! Axum router construction for the judge API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /api/instances` -- configured instances
/// - `POST /validator/{instance}` -- validate and score a submission
///
/// CORS allows any origin so the contest platform can call the judge from
/// the browser.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/instances", get(handlers::list_instances))
        .route("/validator/{instance}", post(handlers::validate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
