//! In-memory prize store

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::IteratorRandom;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use giftdrop_core::constants::MAX_WINNERS_PER_PRIZE;
use giftdrop_core::error::{StoreError, StoreResult};
use giftdrop_core::store::{PrizeStore, RegisterOutcome};
use giftdrop_core::types::{Prize, PrizeId, RatingEntry, Recipient, RecipientId, WinRecord};

/// Guarded store state
///
/// `wins` is keyed by prize so the winner-count guard is a length
/// check on the same entry the uniqueness scan runs over; both execute
/// under the one lock that guards this struct.
#[derive(Debug, Default)]
struct StoreState {
    prizes: BTreeMap<PrizeId, Prize>,
    recipients: BTreeMap<RecipientId, Recipient>,
    wins: HashMap<PrizeId, Vec<WinRecord>>,
    next_prize_id: u64,
}

/// In-memory [`PrizeStore`] implementation
///
/// Shared by handle: clone the `Arc` wrapping it and pass it to
/// whichever task needs it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Storage(format!("store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl PrizeStore for MemoryStore {
    async fn pick_unused_prize(&self) -> StoreResult<Option<Prize>> {
        let state = self.lock()?;
        let picked = state
            .prizes
            .values()
            .filter(|p| !p.consumed)
            .choose(&mut rand::thread_rng())
            .cloned();
        Ok(picked)
    }

    async fn mark_consumed(&self, prize_id: PrizeId) -> StoreResult<()> {
        let mut state = self.lock()?;
        let prize = state
            .prizes
            .get_mut(&prize_id)
            .ok_or(StoreError::PrizeNotFound(prize_id))?;
        if !prize.consumed {
            prize.consumed = true;
            info!(prize_id = %prize_id, "Prize marked consumed");
        }
        Ok(())
    }

    async fn register_recipient(
        &self,
        id: RecipientId,
        display_name: &str,
    ) -> StoreResult<RegisterOutcome> {
        let mut state = self.lock()?;
        if state.recipients.contains_key(&id) {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }
        state.recipients.insert(
            id,
            Recipient {
                id,
                display_name: display_name.to_string(),
            },
        );
        info!(recipient_id = %id, "Recipient registered");
        Ok(RegisterOutcome::Registered)
    }

    async fn list_recipients(&self) -> StoreResult<Vec<Recipient>> {
        let state = self.lock()?;
        Ok(state.recipients.values().cloned().collect())
    }

    async fn count_winners(&self, prize_id: PrizeId) -> StoreResult<usize> {
        let state = self.lock()?;
        Ok(state.wins.get(&prize_id).map_or(0, Vec::len))
    }

    async fn record_win_if_eligible(
        &self,
        recipient_id: RecipientId,
        prize_id: PrizeId,
    ) -> StoreResult<bool> {
        let mut state = self.lock()?;
        // A prize id the catalog has never seen is not winnable.
        if !state.prizes.contains_key(&prize_id) {
            return Ok(false);
        }
        let records = state.wins.entry(prize_id).or_default();
        if records.iter().any(|w| w.recipient_id == recipient_id) {
            return Ok(false);
        }
        if records.len() >= MAX_WINNERS_PER_PRIZE {
            return Ok(false);
        }
        records.push(WinRecord {
            recipient_id,
            prize_id,
            won_at: Utc::now(),
        });
        debug!(
            recipient_id = %recipient_id,
            prize_id = %prize_id,
            count = records.len(),
            "Win recorded"
        );
        Ok(true)
    }

    async fn has_win(&self, recipient_id: RecipientId, prize_id: PrizeId) -> StoreResult<bool> {
        let state = self.lock()?;
        Ok(state
            .wins
            .get(&prize_id)
            .is_some_and(|records| records.iter().any(|w| w.recipient_id == recipient_id)))
    }

    async fn get_prize(&self, prize_id: PrizeId) -> StoreResult<Option<Prize>> {
        let state = self.lock()?;
        Ok(state.prizes.get(&prize_id).cloned())
    }

    async fn replace_catalog(&self, payload_refs: Vec<String>) -> StoreResult<usize> {
        let mut state = self.lock()?;
        state.prizes.clear();
        for payload_ref in payload_refs {
            state.next_prize_id += 1;
            let id = PrizeId(state.next_prize_id);
            state.prizes.insert(id, Prize::new(id, payload_ref));
        }
        let seeded = state.prizes.len();
        info!(count = seeded, "Prize catalog replaced");
        Ok(seeded)
    }

    async fn rating(&self) -> StoreResult<Vec<RatingEntry>> {
        let state = self.lock()?;
        let mut counts: HashMap<RecipientId, usize> = HashMap::new();
        for records in state.wins.values() {
            for win in records {
                *counts.entry(win.recipient_id).or_default() += 1;
            }
        }
        let mut entries: Vec<RatingEntry> = state
            .recipients
            .values()
            .map(|r| RatingEntry {
                recipient_id: r.id,
                display_name: r.display_name.clone(),
                wins: counts.get(&r.id).copied().unwrap_or(0),
            })
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.recipient_id.cmp(&b.recipient_id)));
        Ok(entries)
    }

    async fn unused_prize_count(&self) -> StoreResult<usize> {
        let state = self.lock()?;
        Ok(state.prizes.values().filter(|p| !p.consumed).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_replace_catalog_wipes_and_reseeds() {
        let store = MemoryStore::new();
        assert_eq!(
            store.replace_catalog(payloads(&["a.png", "b.png"])).await.unwrap(),
            2
        );
        assert_eq!(store.unused_prize_count().await.unwrap(), 2);

        // Reseed replaces everything, including consumed rows.
        let prize = store.pick_unused_prize().await.unwrap().unwrap();
        store.mark_consumed(prize.id).await.unwrap();
        assert_eq!(store.replace_catalog(payloads(&["c.png"])).await.unwrap(), 1);
        assert_eq!(store.unused_prize_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_pick_skips_consumed_until_exhausted() {
        let store = MemoryStore::new();
        store.replace_catalog(payloads(&["a.png", "b.png"])).await.unwrap();

        let first = store.pick_unused_prize().await.unwrap().unwrap();
        store.mark_consumed(first.id).await.unwrap();

        let second = store.pick_unused_prize().await.unwrap().unwrap();
        assert_ne!(first.id, second.id);
        store.mark_consumed(second.id).await.unwrap();

        assert!(store.pick_unused_prize().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_consumed_is_idempotent() {
        let store = MemoryStore::new();
        store.replace_catalog(payloads(&["a.png"])).await.unwrap();
        let prize = store.pick_unused_prize().await.unwrap().unwrap();

        store.mark_consumed(prize.id).await.unwrap();
        store.mark_consumed(prize.id).await.unwrap();
        assert_eq!(store.unused_prize_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mark_consumed_unknown_prize() {
        let store = MemoryStore::new();
        let err = store.mark_consumed(PrizeId(99)).await.unwrap_err();
        assert!(matches!(err, StoreError::PrizeNotFound(PrizeId(99))));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_noop() {
        let store = MemoryStore::new();
        assert_eq!(
            store.register_recipient(RecipientId(1), "ada").await.unwrap(),
            RegisterOutcome::Registered
        );
        assert_eq!(
            store.register_recipient(RecipientId(1), "ada-again").await.unwrap(),
            RegisterOutcome::AlreadyRegistered
        );

        let recipients = store.list_recipients().await.unwrap();
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].display_name, "ada");
    }

    #[tokio::test]
    async fn test_win_insert_respects_cap_and_uniqueness() {
        let store = MemoryStore::new();
        store.replace_catalog(payloads(&["a.png"])).await.unwrap();
        let prize = store.pick_unused_prize().await.unwrap().unwrap();

        assert!(store.record_win_if_eligible(RecipientId(1), prize.id).await.unwrap());
        // Same pair again: rejected, count unchanged.
        assert!(!store.record_win_if_eligible(RecipientId(1), prize.id).await.unwrap());
        assert!(store.record_win_if_eligible(RecipientId(2), prize.id).await.unwrap());
        assert!(store.record_win_if_eligible(RecipientId(3), prize.id).await.unwrap());
        // Fourth distinct recipient: cap reached.
        assert!(!store.record_win_if_eligible(RecipientId(4), prize.id).await.unwrap());

        assert_eq!(store.count_winners(prize.id).await.unwrap(), 3);
        assert!(store.has_win(RecipientId(1), prize.id).await.unwrap());
        assert!(!store.has_win(RecipientId(4), prize.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_rating_orders_by_wins_then_id() {
        let store = MemoryStore::new();
        store
            .replace_catalog(payloads(&["a.png", "b.png", "c.png"]))
            .await
            .unwrap();
        for (id, name) in [(1, "ada"), (2, "brian"), (3, "clara")] {
            store.register_recipient(RecipientId(id), name).await.unwrap();
        }

        store.record_win_if_eligible(RecipientId(2), PrizeId(1)).await.unwrap();
        store.record_win_if_eligible(RecipientId(2), PrizeId(2)).await.unwrap();
        store.record_win_if_eligible(RecipientId(3), PrizeId(1)).await.unwrap();

        let rating = store.rating().await.unwrap();
        assert_eq!(rating.len(), 3);
        assert_eq!(rating[0].recipient_id, RecipientId(2));
        assert_eq!(rating[0].wins, 2);
        assert_eq!(rating[1].recipient_id, RecipientId(3));
        assert_eq!(rating[1].wins, 1);
        // Zero-win recipients still listed, id ascending among ties.
        assert_eq!(rating[2].recipient_id, RecipientId(1));
        assert_eq!(rating[2].wins, 0);
    }
}
