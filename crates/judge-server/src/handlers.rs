//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe with the current timestamp |
//! | `GET` | `/api/instances` | Configured instances and their levels |
//! | `POST` | `/validator/{instance}` | Validate and score a submission |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Utc;
use judge_types::{Difficulty, JudgeReport};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /validator/{instance}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRequest {
    /// Difficulty tier of the submission.
    pub difficulty: Difficulty,
    /// The contestant's output file.
    pub content: String,
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report that the server is up.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": {
            "timestamp": Utc::now().to_rfc3339(),
        }
    }))
}

// ---------------------------------------------------------------------------
// GET /api/instances
// ---------------------------------------------------------------------------

/// List configured instances.
pub async fn list_instances(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let instances = state.judge.instances();
    Json(serde_json::json!({
        "count": instances.len(),
        "instances": instances,
    }))
}

// ---------------------------------------------------------------------------
// POST /validator/{instance}
// ---------------------------------------------------------------------------

/// Validate and score one submission.
///
/// Replay is CPU bound, so it runs on the blocking pool.
pub async fn validate(
    State(state): State<Arc<AppState>>,
    Path(instance): Path<String>,
    Json(request): Json<ValidationRequest>,
) -> Result<Json<JudgeReport>, ApiError> {
    let judge = Arc::clone(&state.judge);
    let report = tokio::task::spawn_blocking(move || {
        judge.validate_and_score(&instance, request.difficulty, &request.content)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("validation task failed: {e}")))??;
    Ok(Json(report))
}
