use page_analyzer::config::Config;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(1)
        .connect(config.database_url())
        .await?;

    // runs all pending migrations; no-op if up-to-date
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("migrations applied");

    Ok(())
}
