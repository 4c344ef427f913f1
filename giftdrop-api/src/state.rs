//! Application state for the API server

use std::sync::Arc;

use giftdrop_core::store::PrizeStore;
use giftdrop_engine::{AudienceService, ClaimArbiter};

/// API server state
///
/// Holds handles to the one arbiter/audience service constructed at
/// startup; nothing here is a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Claim arbiter shared with no one else but these handlers
    pub arbiter: Arc<ClaimArbiter>,
    /// Registration and rating service
    pub audience: Arc<AudienceService>,
    /// Store handle for health reporting
    pub store: Arc<dyn PrizeStore>,
    /// API version
    pub version: String,
}

impl AppState {
    pub fn new(
        arbiter: Arc<ClaimArbiter>,
        audience: Arc<AudienceService>,
        store: Arc<dyn PrizeStore>,
    ) -> Self {
        Self {
            arbiter,
            audience,
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: false,
        }
    }
}
