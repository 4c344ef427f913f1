//! API route handlers

pub mod claim;
pub mod health;
pub mod rating;
pub mod recipient;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Recipient endpoints
        .route("/api/v1/recipients", post(recipient::register_recipient))
        // Rating endpoint
        .route("/api/v1/rating", get(rating::get_rating))
        // Claim endpoint
        .route("/api/v1/claims", post(claim::submit_claim))
        // State
        .with_state(state)
}
