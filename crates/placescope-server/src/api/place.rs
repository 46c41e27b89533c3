//! `POST /api/analyze-place`: resolve a profile and score it.

use axum::{extract::State, Extension, Json};
use placescope_core::{Grade, ProfileRecord, ScoreResult};
use placescope_profile::{resolve_profile, score, ProfileOrigin};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct AnalyzePlaceRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct PlaceAnalysis {
    pub origin: ProfileOrigin,
    pub record: ProfileRecord,
    pub analysis: ScoreResult,
    pub grade: Grade,
}

pub(in crate::api) async fn analyze_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzePlaceRequest>,
) -> Result<Json<ApiResponse<PlaceAnalysis>>, ApiError> {
    let url = body.url.trim();
    if url.is_empty() {
        return Err(ApiError::new(
            req_id.0.as_str(),
            "validation_error",
            "url must be non-empty",
        ));
    }

    let analysis = analyze(&state, url).await;
    tracing::info!(
        request_id = %req_id.0,
        origin = ?analysis.origin,
        score = analysis.analysis.completeness_score,
        "place analyzed"
    );

    Ok(Json(ApiResponse::new(&req_id, analysis)))
}

/// Resolve and score the profile behind `url`. Never fails: an unavailable
/// source degrades to the reference profile.
pub(in crate::api) async fn analyze(state: &AppState, url: &str) -> PlaceAnalysis {
    let resolved = resolve_profile(state.profile_source.as_deref(), url).await;
    let analysis = score(&resolved.record);
    PlaceAnalysis {
        origin: resolved.origin,
        grade: analysis.grade(),
        record: resolved.record,
        analysis,
    }
}
