//! Axum router wiring.
//!
//! API routes plus the dashboard document at `/`. CORS is open to any
//! origin (the endpoints are read-only synthetic data) and every request
//! gets an HTTP trace span.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, dashboard};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(dashboard::serve))
        .route("/api/health", get(api::health))
        .route("/api/ga4/config", get(api::ga4_config))
        .route("/api/schema/status", get(api::schema_status_handler))
        .route("/api/conversion/funnel", get(api::conversion_funnel_handler))
        .route("/api/analytics/overview", get(api::analytics_overview_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
