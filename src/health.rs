//! Liveness of the service as seen by the database pool.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PoolStatus {
    /// Open connections, idle or in use.
    pub size: u32,
    pub idle: u32,
    pub max_connections: u32,
}

impl PoolStatus {
    pub fn of(pool: &PgPool) -> Self {
        Self {
            size: pool.size(),
            idle: pool.num_idle() as u32,
            max_connections: pool.options().get_max_connections(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` when the database answered, `unavailable` otherwise.
    pub status: String,
    pub pool: PoolStatus,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ping = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await;
    let pool = PoolStatus::of(&state.db_pool);

    match ping {
        Ok(_) => {
            debug!(size = pool.size, idle = pool.idle, "database ping ok");
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ok".to_string(),
                    pool,
                }),
            )
        }
        Err(e) => {
            warn!(error = %e, "database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    pool,
                }),
            )
        }
    }
}
