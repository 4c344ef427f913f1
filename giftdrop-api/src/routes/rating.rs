//! Rating endpoint

use axum::{extract::State, Json};

use crate::dto::RatingRow;
use crate::error::ApiResult;
use crate::state::AppState;

/// Ordered rating listing: win count descending, recipient id
/// ascending among ties. Read-only.
pub async fn get_rating(State(state): State<AppState>) -> ApiResult<Json<Vec<RatingRow>>> {
    let entries = state.audience.rating().await?;

    let rows = entries
        .into_iter()
        .map(|e| RatingRow {
            recipient_id: e.recipient_id.0,
            display_name: e.display_name,
            wins: e.wins,
        })
        .collect();

    Ok(Json(rows))
}
