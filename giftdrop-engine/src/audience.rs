//! Audience service
//!
//! Registration and the rating listing. Thin by design: both are
//! single store operations, kept behind a service so callers hold one
//! handle instead of reaching into the store contract directly.

use std::sync::Arc;
use tracing::debug;

use giftdrop_core::store::{PrizeStore, RegisterOutcome};
use giftdrop_core::types::{RatingEntry, RecipientId};

use crate::error::EngineResult;

pub struct AudienceService {
    store: Arc<dyn PrizeStore>,
}

impl AudienceService {
    pub fn new(store: Arc<dyn PrizeStore>) -> Self {
        Self { store }
    }

    /// Register a recipient; a repeat registration is a no-op and is
    /// reported as such so the caller can acknowledge accordingly.
    pub async fn register(
        &self,
        id: RecipientId,
        display_name: &str,
    ) -> EngineResult<RegisterOutcome> {
        let outcome = self.store.register_recipient(id, display_name).await?;
        if outcome.already_registered() {
            debug!(recipient_id = %id, "Repeat registration ignored");
        }
        Ok(outcome)
    }

    /// Rating listing, win count descending.
    pub async fn rating(&self) -> EngineResult<Vec<RatingEntry>> {
        Ok(self.store.rating().await?)
    }
}
