//! Giftdrop Core
//!
//! Shared types and contracts for the Giftdrop prize-distribution
//! service: prize/recipient/win-record types, protocol constants, the
//! error taxonomy, and the [`store::PrizeStore`] contract that every
//! storage backend must satisfy.
//!
//! The store contract is the synchronization boundary of the whole
//! system: the claim arbiter and the broadcast scheduler never share
//! state with each other directly, only through a `PrizeStore`.

pub mod constants;
pub mod error;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use store::{PrizeStore, RegisterOutcome};
pub use types::{ClaimOutcome, Prize, PrizeId, RatingEntry, Recipient, RecipientId, WinRecord};
