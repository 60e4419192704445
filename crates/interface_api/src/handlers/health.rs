//! Health check handlers

use axum::extract::State;
use axum::Json;

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};
use serde::Serialize;

use crate::AppState;

/// Readiness payload listing each adapter's health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: AdapterHealth,
    pub adapters: Vec<HealthCheckResult>,
}

/// Liveness check
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Readiness check covering every store adapter
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let adapters = vec![
        state.ledger.health_check().await,
        state.kyc_records.health_check().await,
        state.bills.health_check().await,
        state.settings.health_check().await,
    ];

    let status = if adapters.iter().all(|a| a.status == AdapterHealth::Healthy) {
        AdapterHealth::Healthy
    } else {
        AdapterHealth::Degraded
    };

    Json(ReadinessResponse { status, adapters })
}
