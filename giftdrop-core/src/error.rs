//! Error types for the store contract

use thiserror::Error;

use crate::types::PrizeId;

/// Store operation errors
///
/// Claim race outcomes (`AlreadyWon`, `SoldOut`) are *values* returned
/// by the arbiter, never errors. This enum covers genuine storage
/// failures, which are fatal for the invoking operation but must not
/// crash the other execution context.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Prize not found: {0}")]
    PrizeNotFound(PrizeId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
