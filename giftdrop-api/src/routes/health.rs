//! Health check endpoints

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let unused_prizes = state.store.unused_prize_count().await.unwrap_or(0);
    let recipients = state
        .store
        .list_recipients()
        .await
        .map(|r| r.len())
        .unwrap_or(0);

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        unused_prizes,
        recipients,
    }))
}

/// Ready check endpoint (verifies the store answers)
pub async fn ready_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let store_ok = state.store.unused_prize_count().await.is_ok();
    let status = if store_ok { "ready" } else { "degraded" };

    let unused_prizes = state.store.unused_prize_count().await.unwrap_or(0);
    let recipients = state
        .store
        .list_recipients()
        .await
        .map(|r| r.len())
        .unwrap_or(0);

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: state.version.clone(),
        unused_prizes,
        recipients,
    }))
}
