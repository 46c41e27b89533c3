//! `POST /api/integrated-analysis`: profile score, rank probe, fused report
//! and export document in one request.

use axum::{extract::State, Extension, Json};
use futures::StreamExt;
use placescope_core::ProbePlan;
use placescope_rank::ProbeRequest;
use placescope_report::{export, ExportDocument, IntegratedReport, Report};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::place::analyze;
use super::{map_validation_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct IntegratedRequest {
    pub place_url: String,
    #[serde(flatten)]
    pub plan: ProbePlan,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct IntegratedAnalysis {
    pub report: IntegratedReport,
    pub export: ExportDocument,
}

pub(in crate::api) async fn integrated_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<IntegratedRequest>,
) -> Result<Json<ApiResponse<IntegratedAnalysis>>, ApiError> {
    let rid = req_id.0.as_str();

    let place_url = body.place_url.trim();
    if place_url.is_empty() {
        return Err(ApiError::new(rid, "validation_error", "place_url must be non-empty"));
    }

    // Reject a bad probe request before doing any profile work.
    let request = ProbeRequest::from_plan(body.plan, state.default_max_pages);
    request
        .validated()
        .map_err(|e| map_validation_error(rid, &e))?;

    let place = analyze(&state, place_url).await;
    let request = request.or_address(&place.record.basic_info.address);
    let mut report = Report::new();
    report.set_score(place.analysis);

    let mut stream = Box::pin(
        state
            .probe
            .probe(&request)
            .map_err(|e| map_validation_error(rid, &e))?,
    );
    report.begin_ranking();
    while let Some(result) = stream.next().await {
        report.record_rank(result);
    }

    let integrated = report.aggregate();
    let document = export(&report).map_err(|e| {
        tracing::error!(request_id = %rid, error = %e, "export failed");
        ApiError::new(rid, "internal_error", "failed to build export document")
    })?;

    tracing::info!(request_id = %rid, "integrated analysis complete");

    Ok(Json(ApiResponse::new(
        &req_id,
        IntegratedAnalysis {
            report: integrated,
            export: document,
        },
    )))
}
