pub mod checks;
pub mod dtos;
pub mod urls;

use axum::{
    Json, Router,
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    entities::{CheckRecord, UrlRecord, UrlSummary},
    handlers::dtos::{
        CreateUrlRequest, CreateUrlResponse, ErrorResponse, UrlDetailResponse, UrlListResponse,
    },
    health::{self, HealthResponse, PoolStatus},
};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        urls::create_url,
        urls::list_urls,
        urls::get_url,
        checks::create_check
    ),
    components(schemas(
        HealthResponse,
        PoolStatus,
        CreateUrlRequest,
        CreateUrlResponse,
        UrlListResponse,
        UrlDetailResponse,
        ErrorResponse,
        UrlRecord,
        UrlSummary,
        CheckRecord
    )),
    tags(
        (name = "urls", description = "Tracked urls"),
        (name = "checks", description = "Page checks"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/urls", get(urls::list_urls).post(urls::create_url))
        .route("/urls/{id}", get(urls::get_url))
        .route("/urls/{id}/checks", post(checks::create_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .with_state(state)
}

pub(crate) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "URL not found".to_string(),
        }),
    )
        .into_response()
}

/// Log the cause and answer with a generic 500.
pub(crate) fn internal_error(context: &str, err: anyhow::Error) -> Response {
    error!("{}: {:#}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: context.to_string(),
        }),
    )
        .into_response()
}
