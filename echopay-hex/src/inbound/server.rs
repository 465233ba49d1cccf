//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Json, Router, middleware, routing::get, routing::post};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use echopay_types::{LedgerRepository, PaymentRepository, TransactionRepository};

use super::cors::cors_middleware;
use super::handlers::{self, PaymentsState, TransactionsState};
use crate::openapi::{PaymentsApiDoc, TransactionsApiDoc};
use crate::{ChannelService, PaymentService, TransactionService};

/// HTTP Server for one of the EchoPay services.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Creates the payments server.
    pub fn payments<R: PaymentRepository>(service: PaymentService<R>) -> Self {
        let state = Arc::new(PaymentsState { service });

        let api = Router::new()
            .route(
                "/api/payments",
                get(handlers::list_payments::<R>).post(handlers::create_payment::<R>),
            )
            .with_state(state);

        Self::assemble("payments", api, PaymentsApiDoc::openapi())
    }

    /// Creates the transactions server, which also hosts the transfer channel.
    pub fn transactions<T, L>(
        transactions: TransactionService<T>,
        channels: ChannelService<L>,
    ) -> Self
    where
        T: TransactionRepository,
        L: LedgerRepository,
    {
        let state = Arc::new(TransactionsState {
            transactions,
            channels,
        });

        let api = Router::new()
            .route(
                "/api/transactions",
                get(handlers::list_transactions::<T, L>),
            )
            .route("/api/transactions/send", post(handlers::send::<T, L>))
            .route("/api/transactions/receive", post(handlers::receive::<T, L>))
            .route(
                "/api/channels/{user}/transactions",
                get(handlers::list_channel_transactions::<T, L>),
            )
            .route("/api/channels/transfer", post(handlers::transfer::<T, L>))
            .with_state(state);

        Self::assemble("transactions", api, TransactionsApiDoc::openapi())
    }

    /// Wraps a service's API routes with the routes and layers both services share.
    fn assemble(name: &'static str, api: Router, doc: utoipa::openapi::OpenApi) -> Self {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let router = Router::new()
            .route("/health", get(move || handlers::health(name)))
            .route(
                "/api-docs/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc) }
                }),
            )
            .merge(api)
            .fallback(handlers::fallback)
            // Must come after every route is registered.
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(cors_middleware));

        Self { name, router }
    }

    /// Returns the service name used in logs and the health endpoint.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "{} server listening on {}",
            self.name,
            listener.local_addr()?
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
