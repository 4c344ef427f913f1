//! Recipient registration endpoint

use axum::{extract::State, Json};

use giftdrop_core::types::RecipientId;

use crate::dto::{RegisterRecipientRequest, RegisterRecipientResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Greeting sent to a freshly registered recipient
const WELCOME_MESSAGE: &str = "Welcome! You are registered. Mystery prizes will arrive on a \
schedule; be among the first three to claim one and it is yours!";

/// Acknowledgment for a repeat registration
const ALREADY_REGISTERED_MESSAGE: &str = "You are already registered!";

/// Register a recipient
///
/// A repeat registration is a no-op with its own acknowledgment; no
/// other side effect either way.
pub async fn register_recipient(
    State(state): State<AppState>,
    Json(req): Json<RegisterRecipientRequest>,
) -> ApiResult<Json<RegisterRecipientResponse>> {
    if req.display_name.trim().is_empty() {
        return Err(ApiError::BadRequest("display_name must not be empty".to_string()));
    }

    let outcome = state
        .audience
        .register(RecipientId(req.recipient_id), req.display_name.trim())
        .await?;

    let already_registered = outcome.already_registered();
    let message = if already_registered {
        ALREADY_REGISTERED_MESSAGE
    } else {
        WELCOME_MESSAGE
    };

    Ok(Json(RegisterRecipientResponse {
        recipient_id: req.recipient_id,
        already_registered,
        message: message.to_string(),
    }))
}
