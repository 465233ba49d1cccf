//! Payments service binary.

use echopay_app::{Config, Service, telemetry};
use echopay_hex::{PaymentService, inbound::HttpServer};
use echopay_store::InMemoryPaymentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env(Service::Payments)?;
    let telemetry = telemetry::init(Service::Payments, &config)?;

    tracing::info!("Starting payments server on {}", config.addr());

    let store = InMemoryPaymentStore::seeded()?;
    let server = HttpServer::payments(PaymentService::new(store));

    let result = server.run(&config.addr()).await;
    if let Err(e) = &result {
        tracing::error!("payments server failed: {:#}", e);
    }

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    result
}
