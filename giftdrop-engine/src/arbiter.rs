//! Claim arbitration
//!
//! Translates an inbound claim event into an accept/reject outcome
//! with no possibility of over-award. The accept decision is a single
//! atomic store operation; everything after it is advisory.

use std::sync::Arc;
use tracing::{debug, warn};

use giftdrop_core::store::PrizeStore;
use giftdrop_core::types::{ClaimOutcome, PrizeId, RecipientId};

use crate::error::EngineResult;
use crate::gateway::NotificationGateway;

/// Resolves concurrent claim attempts into at most three winners per
/// prize, each recipient winning a given prize at most once.
pub struct ClaimArbiter {
    store: Arc<dyn PrizeStore>,
    gateway: Arc<dyn NotificationGateway>,
}

impl ClaimArbiter {
    pub fn new(store: Arc<dyn PrizeStore>, gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { store, gateway }
    }

    /// Arbitrate one claim.
    ///
    /// The conditional insert decides acceptance on its own. The
    /// diagnostic read below runs after that decision and only picks
    /// the rejection phrasing; it may observe state that has since
    /// moved on, which is fine because it never gates acceptance.
    pub async fn try_claim(
        &self,
        recipient_id: RecipientId,
        prize_id: PrizeId,
    ) -> EngineResult<ClaimOutcome> {
        if self.store.record_win_if_eligible(recipient_id, prize_id).await? {
            debug!(recipient_id = %recipient_id, prize_id = %prize_id, "Claim accepted");
            self.deliver_reveal(recipient_id, prize_id).await;
            return Ok(ClaimOutcome::Won);
        }

        let outcome = if self.store.has_win(recipient_id, prize_id).await? {
            ClaimOutcome::AlreadyWon
        } else {
            ClaimOutcome::SoldOut
        };
        debug!(
            recipient_id = %recipient_id,
            prize_id = %prize_id,
            outcome = %outcome,
            "Claim rejected"
        );
        Ok(outcome)
    }

    /// Best-effort delivery of the revealed payload to a fresh winner.
    /// The win is already recorded; a reveal failure is logged and
    /// changes nothing.
    async fn deliver_reveal(&self, recipient_id: RecipientId, prize_id: PrizeId) {
        let payload_ref = match self.store.get_prize(prize_id).await {
            Ok(Some(prize)) => prize.payload_ref,
            Ok(None) => {
                warn!(prize_id = %prize_id, "Won prize missing from catalog, reveal skipped");
                return;
            }
            Err(e) => {
                warn!(prize_id = %prize_id, error = %e, "Prize lookup for reveal failed");
                return;
            }
        };
        if let Err(e) = self.gateway.send_reveal(recipient_id, &payload_ref).await {
            warn!(
                recipient_id = %recipient_id,
                prize_id = %prize_id,
                error = %e,
                "Reveal delivery failed"
            );
        }
    }
}
