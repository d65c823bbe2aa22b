use axum::{extract::rejection::JsonRejection, http::HeaderMap, Json};

use crate::domain::{EstimateRequest, EstimateResponse};
use crate::error::ApiResult;
use crate::estimation;
use crate::middleware::RequestIdExt;

/// Generate a construction estimate from plot size and floor count
pub async fn generate_estimate(
    headers: HeaderMap,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<EstimateResponse>> {
    let Json(req) = payload?;
    let report = estimation::generate(&req)?;

    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        scenario = ?req.scenario.tag(),
        total_sqft = report.project_summary.total_sqft,
        duration_days = report.project_summary.duration_days,
        total_cost = report.cost.total_cost,
        "Generated estimate"
    );

    Ok(Json(report))
}
