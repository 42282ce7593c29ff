// handlers/mod.rs - Handlers grouped by what the route guard expects of them
//
// Public (no session needed, includes auth pages) → Protected (session cookie required)
pub mod protected;
pub mod public;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
