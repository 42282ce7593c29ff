use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers::{self, protected, public};
use crate::middleware::route_guard_middleware;

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Public
        .route("/", get(public::landing))
        .route("/health", get(public::health))
        // Auth pages
        .route("/login", get(public::login))
        .route("/signup", get(public::signup))
        // Protected
        .merge(protected_routes())
        .fallback(handlers::not_found)
        .with_state(state)
        // The guard sits innermost so traced requests include its redirects
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(from_fn(route_guard_middleware)),
        )
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(protected::dashboard))
        .route("/dashboard/*section", get(protected::dashboard_section))
        .route("/api/protected/documents/normalize", post(protected::normalize))
        .route("/api/protected/insights", post(protected::insights))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }
    if config.is_development() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(
        environment = ?config.environment,
        project = config.firebase.project_id.as_deref().unwrap_or("unset"),
        "WordWise AI listening on http://{}",
        bind_addr
    );
    if config.firebase.use_emulators {
        tracing::info!(
            auth = %config.firebase.auth_emulator_host,
            firestore = %config.firebase.firestore_emulator_host,
            "Using Firebase emulators"
        );
    }

    axum::serve(listener, app(AppState::new(config)))
        .await
        .context("server error")
}
