//! Liveness check

use crate::shop::SharedState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/health", get(health_check))
}

/// Endpoint: GET /api/health
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        message: "E-commerce API is running",
    })
}
