use axum::Router;
use page_analyzer::{app_state::AppState, fetcher::PageFetcher, handlers};
use sqlx::{PgPool, Pool, Postgres};
use std::{sync::Arc, time::Duration};

/// Connects to `TEST_DATABASE_URL` and migrates, or returns `None` so the
/// calling test can skip.
pub async fn setup_test_db() -> Option<PgPool> {
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping database tests: TEST_DATABASE_URL not set");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

pub fn test_state(pool: Pool<Postgres>) -> AppState {
    let fetcher = PageFetcher::new(Duration::from_secs(2)).expect("Failed to build fetcher");
    AppState::new(pool, Arc::new(fetcher))
}

pub fn test_app(pool: Pool<Postgres>) -> Router {
    handlers::router(test_state(pool))
}
