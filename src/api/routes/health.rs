//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (content loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::path::Path;
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the article list is non-empty.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.content.articles().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let articles = state.content.articles().len();
    let static_bundle = Path::new(&state.server.static_dir).is_dir();

    // Serving the API without a bundle still works, just without pages
    let status = if articles > 0 && static_bundle {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        articles,
        resources: state.content.resources().len(),
        static_bundle,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
