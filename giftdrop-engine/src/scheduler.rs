//! Broadcast scheduler
//!
//! Two states: Idle (waiting for the next tick) and Broadcasting (one
//! cycle in flight). A timer tick moves Idle -> Broadcasting; cycle
//! completion moves back, regardless of per-recipient delivery
//! outcomes. One cycle always runs to completion before the next tick
//! is awaited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, timeout, MissedTickBehavior};
use tracing::{error, info, warn};

use giftdrop_core::store::PrizeStore;
use giftdrop_core::types::PrizeId;

use crate::catalog::AssetCatalog;
use crate::config::SchedulerConfig;
use crate::error::EngineResult;
use crate::gateway::{NotificationGateway, PrizeOffer};

/// Why a cycle ended without broadcasting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipCause {
    /// Every prize in the pool has been consumed
    PoolExhausted,
    /// The selected prize's payload asset is not retrievable; the
    /// prize stays unconsumed and is eligible again next tick
    AssetMissing,
    /// No recipients registered at snapshot time
    EmptyAudience,
}

/// Outcome of one broadcast cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// Cycle ended without consuming anything
    Skipped(SkipCause),
    /// Offer fan-out ran and the prize was consumed
    Broadcast {
        prize_id: PrizeId,
        attempted: usize,
        delivered: usize,
    },
}

/// Timer-driven broadcast loop
pub struct BroadcastScheduler {
    store: Arc<dyn PrizeStore>,
    gateway: Arc<dyn NotificationGateway>,
    catalog: Arc<dyn AssetCatalog>,
    config: SchedulerConfig,
    running: Arc<AtomicBool>,
}

impl BroadcastScheduler {
    pub fn new(
        store: Arc<dyn PrizeStore>,
        gateway: Arc<dyn NotificationGateway>,
        catalog: Arc<dyn AssetCatalog>,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            catalog,
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the background broadcast loop.
    ///
    /// The loop survives arbitrary per-cycle failures: a store error
    /// aborts that cycle with an ERROR log and the loop keeps ticking.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Broadcast scheduler already running");
            return;
        }

        let store = self.store.clone();
        let gateway = self.gateway.clone();
        let catalog = self.catalog.clone();
        let config = self.config.clone();
        let running = self.running.clone();

        tokio::spawn(async move {
            let mut ticker = interval(config.broadcast_interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick fires immediately; consume it so
            // the first broadcast happens one full interval after start.
            ticker.tick().await;

            info!(
                interval_secs = config.broadcast_interval_secs,
                "Broadcast scheduler started"
            );

            while running.load(Ordering::SeqCst) {
                ticker.tick().await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                match run_cycle(&store, &gateway, &catalog, config.delivery_timeout()).await {
                    Ok(report) => log_report(&report),
                    Err(e) => error!(error = %e, "Broadcast cycle aborted"),
                }
            }

            info!("Broadcast scheduler stopped");
        });
    }

    /// Signal the background loop to stop after its current tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Run one broadcast cycle immediately. Used by the loop and
    /// directly by tests.
    pub async fn run_cycle(&self) -> EngineResult<CycleReport> {
        run_cycle(
            &self.store,
            &self.gateway,
            &self.catalog,
            self.config.delivery_timeout(),
        )
        .await
    }
}

/// One Idle -> Broadcasting -> Idle transition.
///
/// The recipient snapshot is copied out of the store before any
/// delivery, and no store lock is ever held across a gateway call.
/// The prize is consumed after all delivery attempts, successful or
/// not: a prize is used once broadcast was attempted to the audience.
async fn run_cycle(
    store: &Arc<dyn PrizeStore>,
    gateway: &Arc<dyn NotificationGateway>,
    catalog: &Arc<dyn AssetCatalog>,
    delivery_timeout: Duration,
) -> EngineResult<CycleReport> {
    let Some(prize) = store.pick_unused_prize().await? else {
        return Ok(CycleReport::Skipped(SkipCause::PoolExhausted));
    };

    if !catalog.is_retrievable(&prize.payload_ref).await {
        warn!(
            prize_id = %prize.id,
            payload_ref = %prize.payload_ref,
            "Prize asset not retrievable, retrying next cycle"
        );
        return Ok(CycleReport::Skipped(SkipCause::AssetMissing));
    }

    let recipients = store.list_recipients().await?;
    if recipients.is_empty() {
        return Ok(CycleReport::Skipped(SkipCause::EmptyAudience));
    }

    let offer = PrizeOffer {
        prize_id: prize.id,
        payload_ref: prize.payload_ref.clone(),
    };

    let mut delivered = 0;
    for recipient in &recipients {
        match timeout(delivery_timeout, gateway.send_offer(recipient, &offer)).await {
            Ok(Ok(())) => delivered += 1,
            Ok(Err(e)) => {
                warn!(
                    recipient_id = %recipient.id,
                    prize_id = %prize.id,
                    error = %e,
                    "Offer delivery failed"
                );
            }
            Err(_) => {
                warn!(
                    recipient_id = %recipient.id,
                    prize_id = %prize.id,
                    "Offer delivery timed out"
                );
            }
        }
    }

    store.mark_consumed(prize.id).await?;

    Ok(CycleReport::Broadcast {
        prize_id: prize.id,
        attempted: recipients.len(),
        delivered,
    })
}

fn log_report(report: &CycleReport) {
    match report {
        CycleReport::Skipped(SkipCause::PoolExhausted) => {
            info!("No unused prizes available, cycle skipped")
        }
        CycleReport::Skipped(SkipCause::AssetMissing) => {
            // Already WARN-logged with the payload ref inside the cycle.
        }
        CycleReport::Skipped(SkipCause::EmptyAudience) => {
            info!("No recipients registered, cycle skipped")
        }
        CycleReport::Broadcast {
            prize_id,
            attempted,
            delivered,
        } => {
            info!(
                prize_id = %prize_id,
                attempted = attempted,
                delivered = delivered,
                "Broadcast cycle complete"
            );
        }
    }
}
