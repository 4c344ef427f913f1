//! The prize store contract
//!
//! The store is the only shared mutable resource in the system; all
//! cross-context synchronization lives behind these operations. Every
//! operation is atomic with respect to every other, completes quickly
//! and returns — implementations must never block on external calls
//! while holding their internal lock.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{Prize, PrizeId, RatingEntry, Recipient, RecipientId};

/// Result of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The recipient was inserted
    Registered,
    /// The recipient id was already present; the call was a no-op
    AlreadyRegistered,
}

impl RegisterOutcome {
    pub fn already_registered(&self) -> bool {
        matches!(self, Self::AlreadyRegistered)
    }
}

/// Durable mapping of prizes, recipients and win records
#[async_trait]
pub trait PrizeStore: Send + Sync {
    /// Return one prize with `consumed == false`, or `None` when the
    /// pool is exhausted. Selection order is unspecified; a prize can
    /// only ever be handed out once because broadcasting consumes it.
    async fn pick_unused_prize(&self) -> StoreResult<Option<Prize>>;

    /// Mark a prize consumed. Safe against double invocation for the
    /// same id; errors if the id is unknown.
    async fn mark_consumed(&self, prize_id: PrizeId) -> StoreResult<()>;

    /// Insert a recipient if absent.
    async fn register_recipient(
        &self,
        id: RecipientId,
        display_name: &str,
    ) -> StoreResult<RegisterOutcome>;

    /// Snapshot of all registered recipients at call time. Recipients
    /// registering afterward do not retroactively join a broadcast
    /// taken from an earlier snapshot.
    async fn list_recipients(&self) -> StoreResult<Vec<Recipient>>;

    /// Current number of win records for a prize.
    async fn count_winners(&self, prize_id: PrizeId) -> StoreResult<usize>;

    /// The single atomic decision point for claims: insert a win
    /// record iff the (recipient, prize) pair is absent AND the prize
    /// currently has fewer than [`crate::constants::MAX_WINNERS_PER_PRIZE`]
    /// winners. The pair-uniqueness check and the guarded count check
    /// execute as one indivisible operation; a caller-side
    /// check-then-insert is a correctness bug.
    async fn record_win_if_eligible(
        &self,
        recipient_id: RecipientId,
        prize_id: PrizeId,
    ) -> StoreResult<bool>;

    /// Whether a win record exists for the pair. Advisory read, used
    /// only to phrase a rejection after the atomic decision above.
    async fn has_win(&self, recipient_id: RecipientId, prize_id: PrizeId) -> StoreResult<bool>;

    /// Look up a prize by id.
    async fn get_prize(&self, prize_id: PrizeId) -> StoreResult<Option<Prize>>;

    /// Wipe the prize table and reseed it with one unconsumed prize
    /// per payload reference. One-shot bootstrap at process start;
    /// returns the number of prizes seeded.
    async fn replace_catalog(&self, payload_refs: Vec<String>) -> StoreResult<usize>;

    /// Rating listing ordered by win count descending, then recipient
    /// id ascending.
    async fn rating(&self) -> StoreResult<Vec<RatingEntry>>;

    /// Number of prizes still eligible for broadcast.
    async fn unused_prize_count(&self) -> StoreResult<usize>;
}
