//! Claim endpoint

use axum::{extract::State, Json};

use giftdrop_core::types::{ClaimOutcome, PrizeId, RecipientId};

use crate::dto::{ClaimRequest, ClaimResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Submit a claim for a prize
///
/// Maps the arbiter's outcome to a distinct user-facing
/// acknowledgment. Rejections are expected race outcomes, not errors;
/// they are shown as alerts the way rejected button presses are.
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(req): Json<ClaimRequest>,
) -> ApiResult<Json<ClaimResponse>> {
    let outcome = state
        .arbiter
        .try_claim(RecipientId(req.recipient_id), PrizeId(req.prize_id))
        .await?;

    let (message, alert) = match outcome {
        ClaimOutcome::Won => ("Congratulations, the prize is yours!", false),
        ClaimOutcome::AlreadyWon => ("You already claimed this prize!", true),
        ClaimOutcome::SoldOut => ("All copies of this prize are gone!", true),
    };

    Ok(Json(ClaimResponse {
        outcome,
        message: message.to_string(),
        alert,
    }))
}
