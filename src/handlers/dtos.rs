use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{CheckRecord, UrlRecord, UrlSummary};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUrlResponse {
    pub id: i64,
    pub name: String,
    /// `false` when the url was already known.
    pub created: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UrlListResponse {
    pub urls: Vec<UrlSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UrlDetailResponse {
    pub url: UrlRecord,
    /// Newest check first.
    pub checks: Vec<CheckRecord>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
