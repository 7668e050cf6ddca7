//! Workout tracker HTTP server.

use std::error::Error;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use workout_tracker::adapters::http::{app_router, AppState, RouterConfig};
use workout_tracker::adapters::memory::InMemoryWorkoutStore;
use workout_tracker::adapters::postgres;
use workout_tracker::config::{AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let state = match &config.database {
        Some(database) => connect(database).await?,
        None => {
            warn!("No database configured, sessions are kept in memory");
            AppState::in_memory(InMemoryWorkoutStore::new())
        }
    };

    let router = app_router(
        state,
        &RouterConfig {
            request_timeout: config.server.request_timeout(),
            cors_origins: config.server.cors_origins_list(),
        },
    );

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        environment = ?config.server.environment,
        "Workout tracker listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<AppState, Box<dyn Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;
    info!(max_connections = database.max_connections, "Connected to PostgreSQL");

    if database.run_migrations {
        postgres::MIGRATOR.run(&pool).await?;
        info!("Migrations applied");
    }

    Ok(postgres::app_state(pool))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
