use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    entities::{CheckRecord, UrlRecord, UrlSummary},
    repositories::{CheckRepositoryTrait, UrlRepositoryTrait},
    urls::{ValidationError, normalize, validate},
};

/// Result of submitting a raw url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: i64, name: String },
    AlreadyExists { id: i64, name: String },
    Invalid(ValidationError),
}

/// A stored url together with its check history, newest check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDetail {
    pub url: UrlRecord,
    pub checks: Vec<CheckRecord>,
}

#[derive(Clone)]
pub struct UrlService {
    urls: Arc<dyn UrlRepositoryTrait>,
    checks: Arc<dyn CheckRepositoryTrait>,
}

impl UrlService {
    pub fn new(urls: Arc<dyn UrlRepositoryTrait>, checks: Arc<dyn CheckRepositoryTrait>) -> Self {
        Self { urls, checks }
    }

    /// Normalize, validate and store `raw` unless its normalized form is
    /// already known.
    pub async fn submit(&self, raw: &str) -> Result<SubmitOutcome> {
        let name = normalize(raw);
        if let Err(error) = validate(&name) {
            debug!(raw, %error, "rejected url");
            return Ok(SubmitOutcome::Invalid(error));
        }

        if let Some(id) = self.urls.find_by_name(&name).await? {
            return Ok(SubmitOutcome::AlreadyExists { id, name });
        }

        let id = self.urls.insert(&name).await?;
        info!(id, %name, "url added");
        Ok(SubmitOutcome::Created { id, name })
    }

    pub async fn list(&self) -> Result<Vec<UrlSummary>> {
        self.urls.list_with_latest_check().await
    }

    /// `None` when no url has this id.
    pub async fn detail(&self, id: i64) -> Result<Option<UrlDetail>> {
        let Some(url) = self.urls.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut checks = self.checks.list_for_url(id).await?;
        sort_checks_newest_first(&mut checks);

        Ok(Some(UrlDetail { url, checks }))
    }
}

/// Order a history for display. Ids, not dates, decide recency: two checks
/// made on the same day share a `created_at`.
pub fn sort_checks_newest_first(checks: &mut [CheckRecord]) {
    checks.sort_unstable_by(|a, b| b.id.cmp(&a.id));
}
