//! Notification gateway seam
//!
//! The transport that actually reaches recipients (push channel, chat
//! bot, whatever carries the payload) lives outside this crate. The
//! engine only needs two outbound operations: deliver a masked prize
//! offer with its claim affordance, and deliver the revealed payload
//! to a winner. Claim events travel the other way and enter through
//! the arbiter, unordered and possibly concurrent per prize.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use giftdrop_core::types::{PrizeId, Recipient, RecipientId};

/// Delivery errors raised by a gateway implementation
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Recipient unreachable: {0}")]
    Unreachable(String),

    #[error("Delivery timed out")]
    Timeout,

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// A broadcast offer: the masked payload plus the claim affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeOffer {
    /// Prize the claim affordance references
    pub prize_id: PrizeId,
    /// Payload reference shown in masked form
    pub payload_ref: String,
}

/// Outbound half of the notification transport
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Deliver a prize offer to one recipient. Failures are isolated
    /// per recipient by the caller.
    async fn send_offer(&self, recipient: &Recipient, offer: &PrizeOffer)
        -> Result<(), GatewayError>;

    /// Deliver the revealed prize payload to a winner.
    async fn send_reveal(
        &self,
        recipient_id: RecipientId,
        payload_ref: &str,
    ) -> Result<(), GatewayError>;
}

/// Gateway that logs deliveries instead of sending them
///
/// Default for local runs where no real transport is wired up.
#[derive(Debug, Default)]
pub struct LogGateway;

#[async_trait]
impl NotificationGateway for LogGateway {
    async fn send_offer(
        &self,
        recipient: &Recipient,
        offer: &PrizeOffer,
    ) -> Result<(), GatewayError> {
        info!(
            recipient_id = %recipient.id,
            prize_id = %offer.prize_id,
            payload_ref = %offer.payload_ref,
            "Offer delivered (log gateway)"
        );
        Ok(())
    }

    async fn send_reveal(
        &self,
        recipient_id: RecipientId,
        payload_ref: &str,
    ) -> Result<(), GatewayError> {
        info!(
            recipient_id = %recipient_id,
            payload_ref = %payload_ref,
            "Reveal delivered (log gateway)"
        );
        Ok(())
    }
}
