//! One check cycle: load a stored url, fetch it, extract its metadata and
//! append the result to the url's history.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    entities::{CheckRecord, NewCheck},
    extractor::extract_page,
    fetcher::{FetchError, PageSource},
    repositories::{CheckRepositoryTrait, UrlRepositoryTrait},
};

#[derive(Debug)]
pub enum CheckOutcome {
    /// The page answered (with any status) and the check was stored.
    Recorded(CheckRecord),
    /// No url has the requested id; nothing was fetched.
    NotFound,
    /// The page could not be fetched; nothing was stored.
    FetchFailed(FetchError),
}

#[derive(Clone)]
pub struct CheckRunner {
    urls: Arc<dyn UrlRepositoryTrait>,
    checks: Arc<dyn CheckRepositoryTrait>,
    pages: Arc<dyn PageSource>,
}

impl CheckRunner {
    pub fn new(
        urls: Arc<dyn UrlRepositoryTrait>,
        checks: Arc<dyn CheckRepositoryTrait>,
        pages: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            urls,
            checks,
            pages,
        }
    }

    /// Errors are storage failures only; every other branch is an outcome.
    #[instrument(skip(self))]
    pub async fn run(&self, url_id: i64) -> Result<CheckOutcome> {
        let Some(url) = self.urls.find_by_id(url_id).await? else {
            return Ok(CheckOutcome::NotFound);
        };

        let page = match self.pages.fetch(&url.name).await {
            Ok(page) => page,
            Err(fetch_error) => {
                warn!(url = %url.name, error = %fetch_error, "check failed");
                return Ok(CheckOutcome::FetchFailed(fetch_error));
            }
        };

        let metadata = extract_page(&page);
        let record = self
            .checks
            .insert(NewCheck {
                url_id: url.id,
                status_code: Some(i32::from(metadata.status_code)),
                h1: metadata.h1,
                title: metadata.title,
                description: metadata.description,
            })
            .await?;

        info!(
            url = %url.name,
            check_id = record.id,
            status = metadata.status_code,
            "check recorded"
        );
        Ok(CheckOutcome::Recorded(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::UrlRecord,
        fetcher::{Charset, MockPageSource, PageResponse},
        repositories::{check::MockCheckRepositoryTrait, url::MockUrlRepositoryTrait},
    };
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;
    use reqwest::StatusCode;
    use url::Url;

    fn stored_url() -> UrlRecord {
        UrlRecord {
            id: 5,
            name: "https://example.com".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }
    }

    fn page(status: StatusCode, html: &str) -> PageResponse {
        PageResponse {
            url_final: Url::parse("https://example.com/").unwrap(),
            status,
            body_utf8: html.to_string(),
            charset: Charset::Utf8,
        }
    }

    fn stored(check: NewCheck) -> CheckRecord {
        CheckRecord {
            id: 42,
            url_id: check.url_id,
            status_code: check.status_code,
            h1: check.h1,
            title: check.title,
            description: check.description,
            created_at: Utc::now().date_naive(),
        }
    }

    fn known_url() -> MockUrlRepositoryTrait {
        let mut urls = MockUrlRepositoryTrait::new();
        urls.expect_find_by_id()
            .with(eq(5_i64))
            .returning(|_| Ok(Some(stored_url())));
        urls
    }

    fn runner(
        urls: MockUrlRepositoryTrait,
        checks: MockCheckRepositoryTrait,
        pages: MockPageSource,
    ) -> CheckRunner {
        CheckRunner::new(Arc::new(urls), Arc::new(checks), Arc::new(pages))
    }

    #[tokio::test]
    async fn test_run_records_extracted_metadata() {
        let mut pages = MockPageSource::new();
        pages
            .expect_fetch()
            .with(eq("https://example.com"))
            .times(1)
            .returning(|_| {
                Ok(page(
                    StatusCode::OK,
                    r#"<title>T</title><meta name="description" content="D"><h1>H</h1>"#,
                ))
            });

        let mut checks = MockCheckRepositoryTrait::new();
        checks
            .expect_insert()
            .withf(|c| {
                c.url_id == 5
                    && c.status_code == Some(200)
                    && c.h1 == "H"
                    && c.title == "T"
                    && c.description == "D"
            })
            .times(1)
            .returning(|c| Ok(stored(c)));

        let outcome = runner(known_url(), checks, pages).run(5).await.unwrap();

        match outcome {
            CheckOutcome::Recorded(record) => {
                assert_eq!(record.id, 42);
                assert_eq!(record.title, "T");
            }
            other => panic!("Expected Recorded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_records_error_status_pages() {
        let mut pages = MockPageSource::new();
        pages
            .expect_fetch()
            .returning(|_| Ok(page(StatusCode::NOT_FOUND, "<h1>Not Found</h1>")));

        let mut checks = MockCheckRepositoryTrait::new();
        checks
            .expect_insert()
            .withf(|c| c.status_code == Some(404) && c.h1 == "Not Found" && c.title.is_empty())
            .times(1)
            .returning(|c| Ok(stored(c)));

        let outcome = runner(known_url(), checks, pages).run(5).await.unwrap();
        assert!(matches!(outcome, CheckOutcome::Recorded(_)));
    }

    #[tokio::test]
    async fn test_run_unknown_url_skips_fetch() {
        let mut urls = MockUrlRepositoryTrait::new();
        urls.expect_find_by_id().returning(|_| Ok(None));
        let mut pages = MockPageSource::new();
        pages.expect_fetch().never();
        let mut checks = MockCheckRepositoryTrait::new();
        checks.expect_insert().never();

        let outcome = runner(urls, checks, pages).run(404).await.unwrap();
        assert!(matches!(outcome, CheckOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_run_fetch_failure_stores_nothing() {
        let mut pages = MockPageSource::new();
        pages
            .expect_fetch()
            .returning(|_| Err(FetchError::RequestTimeout));
        let mut checks = MockCheckRepositoryTrait::new();
        checks.expect_insert().never();

        let outcome = runner(known_url(), checks, pages).run(5).await.unwrap();
        assert!(matches!(
            outcome,
            CheckOutcome::FetchFailed(FetchError::RequestTimeout)
        ));
    }

    #[tokio::test]
    async fn test_run_propagates_storage_errors() {
        let mut pages = MockPageSource::new();
        pages
            .expect_fetch()
            .returning(|_| Ok(page(StatusCode::OK, "<title>ok</title>")));
        let mut checks = MockCheckRepositoryTrait::new();
        checks
            .expect_insert()
            .returning(|_| Err(anyhow::anyhow!("Database insert failed")));

        assert!(runner(known_url(), checks, pages).run(5).await.is_err());
    }
}
