use axum::{extract::State, http::StatusCode, Json};
use crate::{db::SharedStore, models::HealthResponse};
use tracing::{debug, warn};

pub const RUNNING_BANNER: &str = "Simple Backend is Running";

/// Plain-text liveness probe on the root path
pub async fn root() -> &'static str {
    RUNNING_BANNER
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness check endpoint, answers 503 while the database is unreachable
pub async fn ready_check(
    State(store): State<SharedStore>,
) -> (StatusCode, Json<HealthResponse>) {
    debug!("Readiness check requested");
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                message: "Service is ready".to_string(),
            }),
        ),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    message: "Database unreachable".to_string(),
                }),
            )
        }
    }
}
