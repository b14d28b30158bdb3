//! User API Server
//!
//! CRUD service for user records that reports each user's age, derived from
//! the stored date of birth on every read.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod middleware;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::PostgresUserRepository;
use app::UserService;
use config::Config;
use domain::ports::{Clock, FixedClock, SystemClock, UserRepository};

/// User service behind trait objects so tests can swap in other adapters
pub type SharedUserService = Arc<UserService<dyn UserRepository, dyn Clock>>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: SharedUserService,
}

/// JSON logs in production, human-readable otherwise
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,user_api=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutting down server...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load config")?;

    // Initialize tracing
    init_tracing(&config);

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        "Starting User API..."
    );

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    db.ping().await.context("Failed to ping database")?;
    tracing::info!("Database connected");

    // Create adapters
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db));
    let clock: Arc<dyn Clock> = match config.reference_date {
        Some(date) => {
            tracing::warn!(%date, "Ages are computed against a pinned reference date");
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };

    // Create application services
    let user_service = Arc::new(UserService::new(user_repo, clock));

    let state = AppState { user_service };
    let app = routes::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
