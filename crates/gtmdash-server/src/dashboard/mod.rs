//! Dashboard document renderer.
//!
//! The document is a static template with named substitution points, so
//! rendering is testable without the HTTP layer. The client-side
//! controller in the template polls the three report endpoints and
//! patches the DOM; fetch failures are logged to the console only and
//! stale values stay in place.

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::config::Config;

/// Range the dashboard starts on. The API itself defaults to 30d for a
/// missing range; this is purely the initial UI selection.
pub const DEFAULT_RANGE: &str = "7d";

const TEMPLATE: &str = include_str!("template.html");

/// Fill the template's substitution points from config.
pub fn render(cfg: &Config) -> String {
    let site_host = cfg
        .ga4
        .stream_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    TEMPLATE
        .replace("__GA4_MEASUREMENT_ID__", &cfg.ga4.measurement_id)
        .replace("__SITE_HOST__", site_host)
        .replace("__DEFAULT_RANGE__", DEFAULT_RANGE)
}

pub async fn serve(State(state): State<AppState>) -> Html<String> {
    Html(render(state.cfg()))
}
