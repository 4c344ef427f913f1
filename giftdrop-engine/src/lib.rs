//! Giftdrop Engine
//!
//! The concurrency-sensitive heart of the service:
//!
//! - [`arbiter::ClaimArbiter`] resolves concurrent claim attempts for a
//!   prize into at most three accepted winners.
//! - [`scheduler::BroadcastScheduler`] selects one unused prize on a
//!   fixed cadence, fans the offer out to the recipient snapshot and
//!   consumes the prize.
//! - [`gateway::NotificationGateway`] is the seam to the external
//!   transport that delivers payloads and surfaces claim events.
//! - [`catalog::AssetCatalog`] is the seam to the external asset
//!   source used for the one-shot catalog refresh at process start.
//!
//! The two long-running contexts (claim handling, broadcast cycles)
//! share nothing except the store; every cross-context race resolves
//! inside the store's atomic operations.

pub mod arbiter;
pub mod audience;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod scheduler;

pub use arbiter::ClaimArbiter;
pub use audience::AudienceService;
pub use catalog::{refresh_catalog, AssetCatalog, DirCatalog};
pub use config::SchedulerConfig;
pub use error::{EngineError, EngineResult};
pub use gateway::{GatewayError, LogGateway, NotificationGateway, PrizeOffer};
pub use scheduler::{BroadcastScheduler, CycleReport, SkipCause};
