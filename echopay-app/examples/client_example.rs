//! Client example demonstrating payment, transaction and transfer flows
//! against both services running in-process.
//!
//! Run with: cargo run -p echopay-app --example client_example

use echopay_client::{PaymentsClient, TransactionsClient};
use echopay_hex::{ChannelService, PaymentService, TransactionService, inbound::HttpServer};
use echopay_store::{InMemoryLedgerStore, InMemoryPaymentStore, InMemoryTransactionStore};
use tokio::net::TcpListener;

/// Serves `server` on an ephemeral local port and returns its base URL.
async fn spawn(server: HttpServer) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let router = server.router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("server stopped: {}", e);
        }
    });

    Ok(base_url)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let payment_store = InMemoryPaymentStore::seeded()?;
    let payments_url = spawn(HttpServer::payments(PaymentService::new(payment_store))).await?;

    let transactions_server = HttpServer::transactions(
        TransactionService::new(InMemoryTransactionStore::seeded()?),
        ChannelService::new(InMemoryLedgerStore::seeded()?),
    );
    let transactions_url = spawn(transactions_server).await?;

    println!("🚀 Payments on {payments_url}, transactions on {transactions_url}");

    let payments = PaymentsClient::new(&payments_url);
    let transactions = TransactionsClient::new(&transactions_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────

    println!("✅ Payments healthy: {}", payments.health().await?);

    let payment = payments.create_payment(321.99, "Ishita").await?;
    println!(
        "✅ Recorded payment {} from {} ({})",
        payment.id, payment.payer_name, payment.amount
    );

    let rejected = payments.create_payment(0.0, "Nobody").await;
    assert!(rejected.is_err());
    println!("✅ Zero amount rejected: {}", rejected.unwrap_err());

    for p in payments.list_payments().await? {
        println!("   #{} {:>10} {}", p.id, p.amount, p.payer_name);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transactions
    // ─────────────────────────────────────────────────────────────────────────

    let sent = transactions.send(99.5, "Kabir").await?;
    let received = transactions.receive(501.0, "Divya").await?;
    println!(
        "✅ Recorded {} #{} and {} #{}",
        sent.transaction_type, sent.id, received.transaction_type, received.id
    );

    for tx in transactions.list_transactions().await? {
        println!(
            "   #{} {:>8} {:>10} {}",
            tx.id, tx.transaction_type, tx.amount, tx.counterparty
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transfer channel
    // ─────────────────────────────────────────────────────────────────────────

    let transfer = transactions.transfer("user-a", "user-b", 99.5).await?;
    println!(
        "✅ Transfer on {}: #{} for {}, #{} for {}",
        transfer.from_user_log.channel,
        transfer.from_user_log.id,
        transfer.from_user_log.user,
        transfer.to_user_log.id,
        transfer.to_user_log.user
    );

    let self_transfer = transactions.transfer("user-a", "user-a", 10.0).await;
    assert!(self_transfer.is_err());
    println!("✅ Self transfer rejected: {}", self_transfer.unwrap_err());

    for user in ["user-a", "user-b"] {
        let ledger = transactions.list_channel(user).await?;
        println!("   {user}: {} entries", ledger.len());
    }

    println!("\n🎉 All flows completed successfully!");
    Ok(())
}
