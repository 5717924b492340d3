//! Schema validation status report.

use serde::Serialize;

use crate::range::{RangeKey, RangeSpec};

/// Validation state of a single structured-data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaHealth {
    Valid,
    Warning,
    Error,
}

/// Search performance attributed to one schema block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemaPerformance {
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
}

/// One monitored structured-data block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaRecord {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub status: SchemaHealth,
    pub url: &'static str,
    #[serde(rename = "richResultsShowing")]
    pub rich_results_showing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<SchemaPerformance>,
}

/// Aggregate rich-result figures for the selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichResults {
    pub total: u32,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    #[serde(rename = "avgPosition")]
    pub avg_position: f64,
    pub trending: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaStatusReport {
    #[serde(rename = "timeRange")]
    pub time_range: RangeKey,
    pub label: &'static str,
    pub total: u32,
    pub valid: u32,
    pub warnings: u32,
    pub errors: u32,
    pub schemas: Vec<SchemaRecord>,
    #[serde(rename = "richResults")]
    pub rich_results: RichResults,
}

fn valid_record(
    schema_type: &'static str,
    url: &'static str,
    impressions: f64,
    clicks: f64,
    ctr: f64,
    range: &RangeSpec,
) -> SchemaRecord {
    SchemaRecord {
        schema_type,
        status: SchemaHealth::Valid,
        url,
        rich_results_showing: true,
        issues: None,
        performance: Some(SchemaPerformance {
            impressions: range.scale(impressions),
            clicks: range.scale(clicks),
            ctr,
        }),
    }
}

fn broken_record(
    schema_type: &'static str,
    url: &'static str,
    status: SchemaHealth,
    issues: [&'static str; 2],
) -> SchemaRecord {
    SchemaRecord {
        schema_type,
        status,
        url,
        rich_results_showing: false,
        issues: Some(issues.to_vec()),
        performance: None,
    }
}

/// Compute the schema status report for a resolved range.
///
/// The aggregate counters (total 7, valid 5) intentionally do not derive
/// from the listed records (5 entries); the mismatch is part of the
/// published surface and must not be "corrected" here.
pub fn schema_status(range: &RangeSpec) -> SchemaStatusReport {
    SchemaStatusReport {
        time_range: range.key,
        label: range.label,
        total: 7,
        valid: 5,
        warnings: 1,
        errors: 1,
        schemas: vec![
            valid_record("Person", "/", 4200.0, 420.0, 10.0, range),
            valid_record("Organization", "/about", 3100.0, 310.0, 10.0, range),
            valid_record("Service", "/services", 3800.0, 342.0, 9.0, range),
            broken_record(
                "FAQPage",
                "/faq",
                SchemaHealth::Warning,
                ["Duplicate question detected", "Missing answer for question 3"],
            ),
            broken_record(
                "Review",
                "/",
                SchemaHealth::Error,
                ["Missing reviewRating property", "Invalid datePublished format"],
            ),
        ],
        rich_results: RichResults {
            total: 25,
            impressions: range.scale(12847.0),
            clicks: range.scale(1234.0),
            ctr: 9.6,
            avg_position: 3.2,
            trending: format!(
                "+{}% vs previous {}",
                (12.0 * range.multiplier).round() as i64,
                range.previous_period()
            ),
        },
    }
}
