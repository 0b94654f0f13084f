use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app_state::AppState,
    checks::CheckOutcome,
    entities::CheckRecord,
    handlers::{dtos::ErrorResponse, internal_error, not_found},
};

#[utoipa::path(
    post,
    path = "/urls/{id}/checks",
    tag = "checks",
    params(("id" = i64, Path, description = "Url id")),
    responses(
        (status = 201, description = "Page fetched and check recorded", body = CheckRecord),
        (status = 404, description = "Unknown url", body = ErrorResponse),
        (status = 502, description = "Page could not be fetched", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_check(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.check_runner().run(id).await {
        Ok(CheckOutcome::Recorded(check)) => (StatusCode::CREATED, Json(check)).into_response(),
        Ok(CheckOutcome::NotFound) => not_found(),
        Ok(CheckOutcome::FetchFailed(reason)) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("Check failed: {reason}"),
            }),
        )
            .into_response(),
        Err(e) => internal_error("Failed to record check", e),
    }
}
