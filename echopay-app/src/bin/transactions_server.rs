//! Transactions service binary; also serves the user-a/user-b transfer channel.

use echopay_app::{Config, Service, telemetry};
use echopay_hex::{ChannelService, TransactionService, inbound::HttpServer};
use echopay_store::{InMemoryLedgerStore, InMemoryTransactionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env(Service::Transactions)?;
    let telemetry = telemetry::init(Service::Transactions, &config)?;

    tracing::info!("Starting transactions server on {}", config.addr());

    let transactions = TransactionService::new(InMemoryTransactionStore::seeded()?);
    let channels = ChannelService::new(InMemoryLedgerStore::seeded()?);
    let server = HttpServer::transactions(transactions, channels);

    let result = server.run(&config.addr()).await;
    if let Err(e) = &result {
        tracing::error!("transactions server failed: {:#}", e);
    }

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    result
}
