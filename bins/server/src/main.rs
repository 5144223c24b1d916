//! Pivot API Server
//!
//! Main entry point for the currency conversion service.

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pivot_api::{AppState, HealthReporter, create_router};
use pivot_core::currency::{CurrencyService, RateTable};
use pivot_shared::{AppConfig, config::LogConfig, types::CurrencyCode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log);

    // A bad rate table is fatal: the server never starts serving.
    let rates = match RateTable::load(&config.rates.path) {
        Ok(rates) => rates,
        Err(e) => {
            error!(
                error = %e,
                path = %config.rates.path.display(),
                "Failed to load exchange rates"
            );
            return Err(e.into());
        }
    };
    info!(
        currencies = rates.len(),
        base = rates.base_currency().map_or("none", CurrencyCode::as_str),
        path = %config.rates.path.display(),
        "Loaded exchange rates"
    );

    let health = HealthReporter::new();
    let state = AppState::new(CurrencyService::new(rates), health.clone());
    let app = create_router(state, &config.server);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    health.set_serving();
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(health))
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pivot=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Resolves on Ctrl-C or SIGTERM, after flipping the health check to not serving.
async fn shutdown_signal(health: HealthReporter) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    health.set_not_serving();
    info!("Shutdown signal received, draining connections");
}
