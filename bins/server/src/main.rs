//! GymLedger API Server
//!
//! Main entry point for the gym-chain finance service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymledger_api::{AppState, create_router};
use gymledger_core::collector::MultiTenantCollector;
use gymledger_core::finance::FinanceService;
use gymledger_core::ledger::LedgerAggregator;
use gymledger_db::{GymRepository, LedgerRepository, TrainerRepository, connect};
use gymledger_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database).await?;
    info!("Connected to database");

    let collector = MultiTenantCollector::new(
        Arc::new(GymRepository::new(db.clone())),
        Arc::new(LedgerRepository::new(db.clone())),
        Arc::new(TrainerRepository::new(db)),
    )
    .with_config(&config.collector);
    info!(
        max_concurrent_fetches = collector.max_concurrent_fetches(),
        fetch_timeout_ms = config.collector.fetch_timeout_ms,
        "Collector configured"
    );

    let aggregator = LedgerAggregator::new(config.ledger.default_salary());
    info!(
        default_salary = %aggregator.default_salary(),
        currency = %config.ledger.currency,
        "Ledger configured"
    );

    let state = AppState {
        finance: Arc::new(FinanceService::new(collector, aggregator)),
        jwt_service: Arc::new(JwtService::new(&config.jwt)),
        currency: Arc::from(config.ledger.currency.as_str()),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
