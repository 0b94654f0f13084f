use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app_state::AppState,
    handlers::{
        dtos::{CreateUrlRequest, CreateUrlResponse, ErrorResponse, UrlDetailResponse, UrlListResponse},
        internal_error, not_found,
    },
    urls::SubmitOutcome,
};

#[utoipa::path(
    post,
    path = "/urls",
    tag = "urls",
    request_body = CreateUrlRequest,
    responses(
        (status = 201, description = "Url added", body = CreateUrlResponse),
        (status = 200, description = "Url already known", body = CreateUrlResponse),
        (status = 422, description = "Invalid url", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_url(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Response {
    match state.url_service().submit(&payload.url).await {
        Ok(SubmitOutcome::Created { id, name }) => (
            StatusCode::CREATED,
            Json(CreateUrlResponse {
                id,
                name,
                created: true,
            }),
        )
            .into_response(),
        Ok(SubmitOutcome::AlreadyExists { id, name }) => (
            StatusCode::OK,
            Json(CreateUrlResponse {
                id,
                name,
                created: false,
            }),
        )
            .into_response(),
        Ok(SubmitOutcome::Invalid(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!("Invalid URL: {reason}"),
            }),
        )
            .into_response(),
        Err(e) => internal_error("Failed to add url", e),
    }
}

#[utoipa::path(
    get,
    path = "/urls",
    tag = "urls",
    responses(
        (status = 200, description = "All urls with their latest check", body = UrlListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_urls(State(state): State<AppState>) -> Response {
    match state.url_service().list().await {
        Ok(urls) => (StatusCode::OK, Json(UrlListResponse { urls })).into_response(),
        Err(e) => internal_error("Failed to list urls", e),
    }
}

#[utoipa::path(
    get,
    path = "/urls/{id}",
    tag = "urls",
    params(("id" = i64, Path, description = "Url id")),
    responses(
        (status = 200, description = "Url with its check history", body = UrlDetailResponse),
        (status = 404, description = "Unknown url", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_url(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.url_service().detail(id).await {
        Ok(Some(detail)) => (
            StatusCode::OK,
            Json(UrlDetailResponse {
                url: detail.url,
                checks: detail.checks,
            }),
        )
            .into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error("Failed to load url", e),
    }
}
