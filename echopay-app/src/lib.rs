//! # EchoPay Application
//!
//! Process wiring shared by the `payments-server` and `transactions-server`
//! binaries:
//! - Load configuration from environment
//! - Initialize logging and trace export
//! - Build the seeded in-memory stores
//! - Start the HTTP server

pub mod config;
pub mod telemetry;

pub use config::{Config, LogFormat, Service};
