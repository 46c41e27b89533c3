mod integrated;
mod place;
mod ranking;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use placescope_core::AppConfig;
use placescope_profile::{HttpProfileSource, ProfileSource};
use placescope_rank::{RankProbe, ValidationError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<RankProbe>,
    pub profile_source: Option<Arc<dyn ProfileSource>>,
    pub default_max_pages: u32,
}

impl AppState {
    /// Wire the live collaborators named in `config`; anything left
    /// unconfigured falls back to the reference behavior.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let probe = RankProbe::from_config(config)?;
        let profile_source = match &config.profile_source_url {
            Some(url) => {
                let source =
                    HttpProfileSource::new(url, config.request_timeout_secs, &config.user_agent)?;
                Some(Arc::new(source) as Arc<dyn ProfileSource>)
            }
            None => None,
        };

        Ok(Self {
            probe: Arc::new(probe),
            profile_source,
            default_max_pages: config.default_max_pages,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    live_prober: bool,
    live_profile_source: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: &RequestId, data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id.0.clone()),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_validation_error(request_id: &str, error: &ValidationError) -> ApiError {
    tracing::debug!(error = %error, "probe request rejected");
    ApiError::new(request_id, "validation_error", error.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, REQUEST_ID_HEADER])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze-place", post(place::analyze_place))
        .route("/api/check-ranking", post(ranking::check_ranking))
        .route(
            "/api/integrated-analysis",
            post(integrated::integrated_analysis),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse::new(
        &req_id,
        HealthData {
            status: "ok",
            live_prober: state.probe.has_live(),
            live_profile_source: state.profile_source.is_some(),
        },
    ))
}

#[cfg(test)]
mod tests;
