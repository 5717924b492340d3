#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gtmdash_server::config::Config;
use gtmdash_server::dashboard::{render, DEFAULT_RANGE};

fn config_with(measurement_id: &str, stream_url: &str) -> Config {
    let id = measurement_id.to_string();
    let url = stream_url.to_string();
    Config::from_lookup(move |k| match k {
        "GA4_MEASUREMENT_ID" => Some(id.clone()),
        "GTM_EXPERT_STREAM_URL" => Some(url.clone()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn substitution_points_are_filled() {
    let html = render(&config_with("G-ABCDEF", "https://example.org/"));

    assert!(html.contains("G-ABCDEF"));
    assert!(html.contains("<strong>Site:</strong> example.org"));
    assert!(!html.contains("__GA4_MEASUREMENT_ID__"));
    assert!(!html.contains("__SITE_HOST__"));
    assert!(!html.contains("__DEFAULT_RANGE__"));
}

#[test]
fn time_selector_has_three_range_buttons() {
    let html = render(&config_with("G-ABCDEF", "https://example.org"));
    assert_eq!(html.matches("class=\"time-btn").count(), 3);
    assert!(html.contains("data-range=\"24h\""));
    assert!(html.contains(&format!("data-range=\"{DEFAULT_RANGE}\"")));
    assert!(html.contains("data-range=\"30d\""));
}

#[test]
fn metric_cards_and_insights_container_present() {
    let html = render(&config_with("G-ABCDEF", "https://example.org"));
    for metric in ["schema", "rich-results", "conversion", "pipeline"] {
        assert!(html.contains(&format!("data-metric=\"{metric}\"")), "missing card {metric}");
    }
    assert!(html.contains("data-change=\"rich-results\""));
    assert!(html.contains("id=\"insightsContainer\""));
}

#[test]
fn api_links_start_on_the_default_range() {
    let html = render(&config_with("G-ABCDEF", "https://example.org"));
    for path in ["/api/schema/status", "/api/conversion/funnel", "/api/analytics/overview"] {
        assert!(html.contains(&format!("{path}?range={DEFAULT_RANGE}")), "missing link {path}");
    }
    // Health and GA4 config links carry no range.
    assert!(html.contains("href=\"/api/health\""));
    assert!(html.contains("href=\"/api/ga4/config\""));
}

#[test]
fn client_fetches_all_three_reports_concurrently() {
    let html = render(&config_with("G-ABCDEF", "https://example.org"));
    assert!(html.contains("Promise.all"));
    assert!(html.contains("/api/schema/status?range=${range}"));
    assert!(html.contains("/api/conversion/funnel?range=${range}"));
    assert!(html.contains("/api/analytics/overview?range=${range}"));
    // Failures are logged only; no user-facing error state.
    assert!(html.contains("console.error"));
}
