//! # Health Check Handler
//!
//! Liveness endpoint for load balancers, monitoring systems and deployment
//! tools. It performs no dependency checks.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::StatusBody;

/// Health check endpoint, mounted at `/health` for every method.
///
/// # Returns
///
/// Always `200 OK` with `{"status":"ok","message":"Service is running"}`.
#[instrument]
pub async fn health_check() -> Json<StatusBody> {
    debug!("Health check endpoint accessed");
    Json(StatusBody::HEALTH)
}
