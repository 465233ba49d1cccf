//! EchoPay CLI
//!
//! Command-line interface for the payments and transactions APIs.

use anyhow::Result;
use clap::{Parser, Subcommand};

use echopay_client::{PaymentsClient, TransactionsClient};

#[derive(Parser)]
#[command(name = "echopay")]
#[command(author, version, about = "EchoPay API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the payments service
    #[arg(
        long,
        env = "ECHOPAY_PAYMENTS_URL",
        default_value = "http://localhost:8080"
    )]
    payments_url: String,

    /// Base URL of the transactions service
    #[arg(
        long,
        env = "ECHOPAY_TRANSACTIONS_URL",
        default_value = "http://localhost:8081"
    )]
    transactions_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Sent/received transaction operations
    Tx {
        #[command(subcommand)]
        action: TxCommands,
    },
    /// user-a <-> user-b channel operations
    Channel {
        #[command(subcommand)]
        action: ChannelCommands,
    },
    /// Check both services
    Health,
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// List payments, newest first
    List,
    /// Record a payment
    Create {
        #[arg(long)]
        amount: f64,
        /// Name of the payer
        #[arg(long)]
        payer: String,
    },
}

#[derive(Subcommand)]
enum TxCommands {
    /// List transactions, newest first
    List,
    /// Record money sent
    Send {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        counterparty: String,
    },
    /// Record money received
    Receive {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        counterparty: String,
    },
}

#[derive(Subcommand)]
enum ChannelCommands {
    /// Show one participant's ledger
    List {
        /// user-a or user-b
        user: String,
    },
    /// Transfer between the participants
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let payments = PaymentsClient::new(&cli.payments_url);
    let transactions = TransactionsClient::new(&cli.transactions_url);

    match cli.command {
        Commands::Health => {
            let mut all_healthy = true;
            for (name, healthy) in [
                ("payments", payments.health().await.unwrap_or(false)),
                ("transactions", transactions.health().await.unwrap_or(false)),
            ] {
                if healthy {
                    println!("✓ {} API is healthy", name);
                } else {
                    println!("✗ {} API is not healthy", name);
                    all_healthy = false;
                }
            }
            if !all_healthy {
                std::process::exit(1);
            }
        }

        Commands::Payment { action } => match action {
            PaymentCommands::List => print_json(&payments.list_payments().await?)?,
            PaymentCommands::Create { amount, payer } => {
                print_json(&payments.create_payment(amount, &payer).await?)?
            }
        },

        Commands::Tx { action } => match action {
            TxCommands::List => print_json(&transactions.list_transactions().await?)?,
            TxCommands::Send {
                amount,
                counterparty,
            } => print_json(&transactions.send(amount, &counterparty).await?)?,
            TxCommands::Receive {
                amount,
                counterparty,
            } => print_json(&transactions.receive(amount, &counterparty).await?)?,
        },

        Commands::Channel { action } => match action {
            ChannelCommands::List { user } => {
                print_json(&transactions.list_channel(&user).await?)?
            }
            ChannelCommands::Transfer { from, to, amount } => {
                print_json(&transactions.transfer(&from, &to, amount).await?)?
            }
        },
    }

    Ok(())
}
