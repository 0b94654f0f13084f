use anyhow::Result;
use page_analyzer::{app_state::AppState, config::Config, fetcher::PageFetcher, handlers};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .min_connections(config.db_min_connections())
        .max_connections(config.db_max_connections())
        .connect(config.database_url())
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    let fetcher = PageFetcher::new(config.fetch_timeout())?;
    let app = handlers::router(AppState::new(pool, Arc::new(fetcher)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A failed registration never resolves, since
/// the returned future completing is what stops the server.
async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, initiating graceful shutdown...");
}
