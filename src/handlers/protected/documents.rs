use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::records::{normalize_record, NormalizedRecord, PersistedRecord};

/// POST /api/protected/documents/normalize - Canonicalize a stored record
///
/// Accepts a record as read from the document store, or `null`.
///
/// Expected Input:
/// ```json
/// {
///   "createdAt": { "_seconds": 1700000000, "_nanoseconds": 0 },
///   "title": "Draft"
/// }
/// ```
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": { "createdAt": "2023-11-14T22:13:20.000Z", "title": "Draft" }
/// }
/// ```
pub async fn normalize(
    payload: Result<Json<Option<PersistedRecord>>, JsonRejection>,
) -> ApiResult<Option<NormalizedRecord>> {
    let Json(record) = payload.map_err(ApiError::from)?;
    let normalized = normalize_record(record.as_ref());

    tracing::debug!(present = normalized.is_some(), "normalized document");
    Ok(ApiResponse::success(normalized))
}
