//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};

use giftdrop_core::types::ClaimOutcome;

// ============ Recipient DTOs ============

/// Register recipient request
#[derive(Debug, Deserialize)]
pub struct RegisterRecipientRequest {
    /// External recipient id (chat/account id)
    pub recipient_id: i64,
    /// Display name shown in the rating listing
    pub display_name: String,
}

/// Register recipient response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRecipientResponse {
    pub recipient_id: i64,
    pub already_registered: bool,
    /// Welcome or already-registered acknowledgment
    pub message: String,
}

// ============ Claim DTOs ============

/// Claim event
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub recipient_id: i64,
    pub prize_id: u64,
}

/// Claim outcome response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub outcome: ClaimOutcome,
    /// User-facing acknowledgment for this outcome
    pub message: String,
    /// Whether the gateway should surface this as an alert
    pub alert: bool,
}

// ============ Rating DTOs ============

/// One row of the rating listing
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingRow {
    pub recipient_id: i64,
    pub display_name: String,
    pub wins: usize,
}

// ============ Health DTOs ============

/// Health/readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub unused_prizes: usize,
    pub recipients: usize,
}
