use crate::entities::{CheckRecord, NewCheck};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckRepositoryTrait: Send + Sync {
    /// Append a check dated today and return the stored row.
    async fn insert(&self, check: NewCheck) -> Result<CheckRecord>;

    /// All checks of a url, in no particular order.
    async fn list_for_url(&self, url_id: i64) -> Result<Vec<CheckRecord>>;
}

#[derive(Clone)]
pub struct CheckRepository {
    pool: Pool<Postgres>,
}

impl CheckRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckRepositoryTrait for CheckRepository {
    async fn insert(&self, check: NewCheck) -> Result<CheckRecord> {
        let record = sqlx::query_as::<_, CheckRecord>(
            r#"
            INSERT INTO url_checks (url_id, status_code, h1, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, url_id, status_code, h1, title, description, created_at
            "#,
        )
        .bind(check.url_id)
        .bind(check.status_code)
        .bind(check.h1)
        .bind(check.title)
        .bind(check.description)
        .bind(Utc::now().date_naive())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_for_url(&self, url_id: i64) -> Result<Vec<CheckRecord>> {
        let checks = sqlx::query_as::<_, CheckRecord>(
            r#"
            SELECT id, url_id, status_code, h1, title, description, created_at
            FROM url_checks
            WHERE url_id = $1
            "#,
        )
        .bind(url_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(checks)
    }
}
