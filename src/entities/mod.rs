use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// --- Tables ---

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct UrlRecord {
    pub id: i64,
    pub name: String, // canonical scheme://host, unique
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct CheckRecord {
    pub id: i64,
    pub url_id: i64, // FK -> urls.id
    pub status_code: Option<i32>,
    pub h1: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDate,
}

/// Insert payload for `url_checks`. The repository stamps `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheck {
    pub url_id: i64,
    pub status_code: Option<i32>,
    pub h1: String,
    pub title: String,
    pub description: String,
}

/// --- Views ---

/// One row of the url list: a url and its latest check, if any.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct UrlSummary {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDate,
    pub last_check_at: Option<NaiveDate>,
    pub last_status_code: Option<i32>,
}
