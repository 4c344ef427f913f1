//! Giftdrop API
//!
//! HTTP surface acting as the inbound half of the notification
//! gateway: registration events, the rating query, claim events and
//! health checks. Claim handlers run concurrently on the runtime and
//! form the inbound-event context of the system; they synchronize with
//! the broadcast scheduler only through the store.

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{run_server, start_background_server};
pub use state::{ApiConfig, AppState};
