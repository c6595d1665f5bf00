use axum::Json;
use serde::Serialize;

use dinnercaster_core::ServiceInfo;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

/// Static service description, same record as the `get_info` tool.
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
