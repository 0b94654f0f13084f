use crate::entities::{UrlRecord, UrlSummary};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepositoryTrait: Send + Sync {
    /// Exact-match lookup on the normalized name.
    async fn find_by_name(&self, name: &str) -> Result<Option<i64>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>>;

    /// Store `name` stamped with today's date and return its id. A name that
    /// already exists resolves to the existing row's id.
    async fn insert(&self, name: &str) -> Result<i64>;

    /// Every url, newest first, with the date and status of its latest check.
    async fn list_with_latest_check(&self) -> Result<Vec<UrlSummary>>;
}

#[derive(Clone)]
pub struct UrlRepository {
    pool: Pool<Postgres>,
}

impl UrlRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepositoryTrait for UrlRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM urls
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>> {
        let url = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(url)
    }

    async fn insert(&self, name: &str) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        // The UNIQUE(name) constraint settles concurrent submissions of the
        // same url; the loser of the race falls through to the lookup.
        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (name, created_at)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(Utc::now().date_naive())
        .fetch_optional(&mut *tx)
        .await?;

        let id = match inserted {
            Some(id) => id,
            None => {
                sqlx::query_scalar::<_, i64>("SELECT id FROM urls WHERE name = $1")
                    .bind(name)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(id)
    }

    async fn list_with_latest_check(&self) -> Result<Vec<UrlSummary>> {
        let rows = sqlx::query_as::<_, UrlSummary>(
            r#"
            SELECT u.id,
                   u.name,
                   u.created_at,
                   latest.created_at  AS last_check_at,
                   latest.status_code AS last_status_code
            FROM urls u
            LEFT JOIN LATERAL (
                SELECT c.created_at, c.status_code
                FROM url_checks c
                WHERE c.url_id = u.id
                ORDER BY c.created_at DESC, c.id DESC
                LIMIT 1
            ) latest ON TRUE
            ORDER BY u.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
