use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::insights::{ReadabilityReport, UsageReport};
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub readability_score: Option<f64>,
    pub requests_used: Option<u64>,
    /// Falls back to the configured default limit
    pub request_limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageReport>,
}

/// POST /api/protected/insights - Readability band and rate-limit usage level
pub async fn insights(
    State(state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> ApiResult<InsightsResponse> {
    let Json(request) = payload.map_err(ApiError::from)?;

    let readability = request
        .readability_score
        .map(ReadabilityReport::from_score)
        .transpose()?;

    let usage = match request.requests_used {
        Some(used) => {
            let limit = request.request_limit.unwrap_or(state.config.usage.default_request_limit);
            Some(UsageReport::new(used, limit, &state.config.usage)?)
        }
        None => None,
    };

    Ok(ApiResponse::success(InsightsResponse { readability, usage }))
}
