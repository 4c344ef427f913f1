//! Giftdrop Store
//!
//! In-process implementation of the [`giftdrop_core::PrizeStore`]
//! contract. All operations execute under a single interior lock, which
//! makes every contract operation atomic with respect to every other —
//! in particular the conditional win insert, where the pair-uniqueness
//! check and the guarded winner-count check must be indivisible.
//!
//! The lock is never held across an await point; every operation
//! copies its result out and releases before returning.

pub mod memory;

pub use memory::MemoryStore;
