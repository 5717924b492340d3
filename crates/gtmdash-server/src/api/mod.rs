//! JSON API handlers.
//!
//! Every report endpoint resolves the `range` query value (unknown keys
//! normalize to 30d, never an error), computes the report in core, and
//! wraps it as `{success, data, timestamp}`. No handler reads a request
//! body and none returns a non-200 status in normal operation.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use gtmdash_core::range::RangeSpec;
use gtmdash_core::report::{
    analytics_overview, conversion_funnel, schema_status, AnalyticsReport, ConversionReport,
    SchemaStatusReport,
};

use crate::app_state::AppState;

/// Server-generated ISO-8601 timestamp attached to every JSON response.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            timestamp: now_iso(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

impl RangeQuery {
    fn resolve(&self) -> RangeSpec {
        RangeSpec::resolve(self.range.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: &'static str,
    pub ga4_configured: bool,
    pub features: [&'static str; 4],
    pub version: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now_iso(),
        message: "GTM Schema & Conversion Dashboard",
        ga4_configured: state.ga4().configured(),
        features: [
            "Schema Monitoring",
            "Conversion Tracking",
            "GA4 Integration",
            "Time Range Selection",
        ],
        version: "2.0",
    })
}

#[derive(Debug, Serialize)]
pub struct Ga4ConfigData {
    #[serde(rename = "measurementId")]
    pub measurement_id: String,
    #[serde(rename = "streamUrl")]
    pub stream_url: String,
    #[serde(rename = "streamId")]
    pub stream_id: String,
    pub configured: bool,
}

pub async fn ga4_config(State(state): State<AppState>) -> Json<ApiResponse<Ga4ConfigData>> {
    let ga4 = state.ga4();
    ApiResponse::ok(Ga4ConfigData {
        measurement_id: ga4.measurement_id.clone(),
        stream_url: ga4.stream_url.clone(),
        stream_id: ga4.stream_id.clone(),
        configured: ga4.configured(),
    })
}

pub async fn schema_status_handler(
    Query(q): Query<RangeQuery>,
) -> Json<ApiResponse<SchemaStatusReport>> {
    let spec = q.resolve();
    tracing::debug!(range = spec.key.as_str(), "schema status");
    ApiResponse::ok(schema_status(&spec))
}

pub async fn conversion_funnel_handler(
    Query(q): Query<RangeQuery>,
) -> Json<ApiResponse<ConversionReport>> {
    let spec = q.resolve();
    tracing::debug!(range = spec.key.as_str(), "conversion funnel");
    ApiResponse::ok(conversion_funnel(&spec))
}

pub async fn analytics_overview_handler(
    Query(q): Query<RangeQuery>,
) -> Json<ApiResponse<AnalyticsReport>> {
    let spec = q.resolve();
    tracing::debug!(range = spec.key.as_str(), "analytics overview");
    ApiResponse::ok(analytics_overview(&spec))
}
