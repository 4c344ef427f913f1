//! Engine error types

use thiserror::Error;

use giftdrop_core::error::StoreError;

/// Engine errors
///
/// A claim rejection is not an error; claims only fail with
/// `EngineError` when the store itself fails. Per-recipient delivery
/// failures are handled inside the broadcast cycle and never surface
/// here.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Asset catalog error: {0}")]
    Catalog(#[from] std::io::Error),

    #[error("No eligible prize assets found in catalog")]
    EmptyCatalog,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
