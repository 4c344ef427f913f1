//! Core types for prizes, recipients and win records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prize identifier, assigned sequentially at catalog refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrizeId(pub u64);

impl fmt::Display for PrizeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prize_{}", self.0)
    }
}

/// Recipient identifier (external chat/account id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipientId(pub i64);

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recipient_{}", self.0)
    }
}

/// A prize in the catalog
///
/// Seeded at catalog refresh, one row per discovered asset. `consumed`
/// transitions false -> true exactly once, when the scheduler
/// broadcasts the prize, and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    /// Prize ID (unique within the current catalog)
    pub id: PrizeId,
    /// Reference to the payload asset (file name within the catalog)
    pub payload_ref: String,
    /// Whether this prize has already been broadcast
    pub consumed: bool,
}

impl Prize {
    pub fn new(id: PrizeId, payload_ref: impl Into<String>) -> Self {
        Self {
            id,
            payload_ref: payload_ref.into(),
            consumed: false,
        }
    }
}

/// A registered recipient
///
/// Created on first registration, immutable thereafter, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Recipient ID
    pub id: RecipientId,
    /// Display name shown in the rating listing
    pub display_name: String,
}

/// Durable proof that a recipient won a specific prize
///
/// Created only by a successful claim; the (recipient_id, prize_id)
/// pair is unique. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    /// Winning recipient
    pub recipient_id: RecipientId,
    /// Prize that was won
    pub prize_id: PrizeId,
    /// When the claim was accepted
    pub won_at: DateTime<Utc>,
}

/// Outcome of a claim attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// Claim accepted; a win record was created
    Won,
    /// This recipient already holds a win record for this prize
    AlreadyWon,
    /// All copies of this prize were already awarded
    SoldOut,
}

impl ClaimOutcome {
    /// String form used in responses and structured logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::AlreadyWon => "already_won",
            Self::SoldOut => "sold_out",
        }
    }
}

impl fmt::Display for ClaimOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the rating listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub recipient_id: RecipientId,
    pub display_name: String,
    pub wins: usize,
}
