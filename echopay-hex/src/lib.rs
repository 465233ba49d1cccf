//! # EchoPay Hex
//!
//! Application service layer and HTTP adapter for the EchoPay ledgers.
//!
//! ## Architecture
//!
//! - `service/` - Application services (validate, then drive the store ports)
//! - `inbound/` - HTTP adapter (Axum servers for payments and transactions)
//! - `openapi/` - OpenAPI documents served at `/api-docs/openapi.json`
//!
//! Services are generic over their repository port, allowing
//! different store implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{ChannelService, PaymentService, TransactionService};
