// handlers/public/mod.rs - Pages reachable without a session
//
// `/login` and `/signup` are auth pages: the route guard sends visitors who
// already hold a session on to the dashboard before these handlers run.

use axum::extract::State;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price_usd: u32,
    pub features: &'static [&'static str],
}

const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        monthly_price_usd: 0,
        features: &["Grammar checks", "Readability score", "5 documents"],
    },
    PricingTier {
        name: "Pro",
        monthly_price_usd: 12,
        features: &[
            "Everything in Free",
            "Style suggestions",
            "Unlimited documents",
            "Priority support",
        ],
    },
];

/// GET / - Landing page descriptor
pub async fn landing() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "WordWise AI",
        "version": env!("CARGO_PKG_VERSION"),
        "tagline": "Write clearly, with an assistant that reads along",
        "pricing": PRICING,
        "links": {
            "login": "/login",
            "signup": "/signup",
            "dashboard": "/dashboard"
        }
    }))
}

/// GET /health - Liveness check
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "environment": state.config.environment,
        "emulators": state.config.firebase.use_emulators
    }))
}

/// GET /login - Sign-in page descriptor
pub async fn login() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "page": "login",
        "title": "Sign in to WordWise AI",
        "alternate": "/signup"
    }))
}

/// GET /signup - Registration page descriptor
pub async fn signup() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "page": "signup",
        "title": "Create your WordWise AI account",
        "alternate": "/login"
    }))
}
