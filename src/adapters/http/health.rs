//! Service info and liveness endpoints.

use axum::Json;
use serde::Serialize;

use crate::domain::foundation::Timestamp;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub documentation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET / - Service info
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Workout Tracking API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        documentation: "/docs",
    })
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: Timestamp::now().to_rfc3339(),
    })
}
