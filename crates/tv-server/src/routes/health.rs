//! GET /health

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness/readiness probe. Always succeeds; never touches the dataset.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
