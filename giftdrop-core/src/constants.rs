//! Protocol Constants
//!
//! Centralized constants for the Giftdrop service. Magic numbers and
//! default configuration values live here for consistency.

// ============================================================================
// Award Limits
// ============================================================================

/// Maximum number of recipients that may win a single prize.
///
/// The store's conditional insert enforces this bound atomically; no
/// prize ever accumulates more win records than this.
pub const MAX_WINNERS_PER_PRIZE: usize = 3;

// ============================================================================
// Scheduler Defaults
// ============================================================================

/// Default interval between broadcast cycles, in seconds.
pub const DEFAULT_BROADCAST_INTERVAL_SECS: u64 = 3600;

/// Default upper bound on a single per-recipient delivery attempt,
/// in seconds. A delivery still pending after this long is treated as
/// a delivery failure so a slow recipient cannot stall the cycle.
pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Catalog Defaults
// ============================================================================

/// Asset file extensions eligible for the prize catalog.
pub const CATALOG_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
