//! HTTP Inbound Adapter
//!
//! Axum-based HTTP servers that drive the application layer.

mod cors;
mod handlers;
mod json;
mod server;

pub use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use handlers::{ApiError, PaymentsState, TransactionsState};
pub use json::{ApiJson, ApiPath};
pub use server::HttpServer;
