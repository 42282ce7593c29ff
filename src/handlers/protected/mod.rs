// handlers/protected/mod.rs - Pages and APIs that require a session
//
// The route guard redirects visitors without a `session` cookie to /login
// before any of these handlers run.

use axum::extract::Path;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RouteGuard};

pub mod documents;
pub mod insights;

pub use documents::normalize;
pub use insights::insights;

/// GET /dashboard - Dashboard placeholder
pub async fn dashboard() -> ApiResponse<Value> {
    dashboard_page("overview")
}

/// GET /dashboard/*section - Dashboard sub-pages share the placeholder
///
/// Paths the guard skips (asset-like last segments) never reach a session
/// check, so they must not render dashboard content either.
pub async fn dashboard_section(Path(section): Path<String>) -> ApiResult<Value> {
    let path = format!("/dashboard/{section}");
    if RouteGuard::is_excluded(&path) {
        return Err(ApiError::not_found(format!("No route for {path}")));
    }
    Ok(dashboard_page(&section))
}

fn dashboard_page(section: &str) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "page": "dashboard",
        "section": section,
        "title": "Your documents",
        "documents": []
    }))
}
