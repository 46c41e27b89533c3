//! `POST /api/check-ranking`: run a probe to completion.

use axum::{extract::State, Extension, Json};
use futures::StreamExt;
use placescope_core::{KeywordRankResult, ProbePlan};
use placescope_rank::ProbeRequest;

use crate::middleware::RequestId;

use super::{map_validation_error, ApiError, ApiResponse, AppState};

pub(in crate::api) async fn check_ranking(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ProbePlan>,
) -> Result<Json<ApiResponse<Vec<KeywordRankResult>>>, ApiError> {
    let request = ProbeRequest::from_plan(body, state.default_max_pages);
    let stream = state
        .probe
        .probe(&request)
        .map_err(|e| map_validation_error(&req_id.0, &e))?;
    let results: Vec<KeywordRankResult> = stream.collect().await;

    tracing::info!(
        request_id = %req_id.0,
        keywords = results.len(),
        found = results.iter().filter(|r| r.found).count(),
        "ranking check complete"
    );

    Ok(Json(ApiResponse::new(&req_id, results)))
}
