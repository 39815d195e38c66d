//! HTTP API: router, server wiring, handlers, rate limiting and the
//! crash-game websocket feed.

pub mod errors;
pub mod handlers;
pub mod platform_router;
pub mod rate_limiter;
pub mod server;
pub mod websocket;

pub use errors::{ApiError, ApiResult};
