#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gtmdash_core::range::RangeSpec;
use gtmdash_core::report::{analytics_overview, conversion_funnel, schema_status, SchemaHealth};

#[test]
fn funnel_30d_is_identity_scaling() {
    let report = conversion_funnel(&RangeSpec::resolve(Some("30d")));
    let counts: Vec<u64> = report.funnel.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![8247, 412, 87, 23]);
    assert_eq!(report.metrics.total_revenue, 460_000);
    assert_eq!(report.metrics.pipeline_value, 460_000);
}

#[test]
fn funnel_24h_customers_round_up() {
    let report = conversion_funnel(&RangeSpec::resolve(Some("24h")));
    assert_eq!(report.funnel[3].count, 697);
}

#[test]
fn funnel_7d_revenue_is_two_million() {
    let report = conversion_funnel(&RangeSpec::resolve(Some("7d")));
    assert_eq!(report.metrics.total_revenue, 2_000_000);
    assert_eq!(report.metrics.pipeline_value, report.metrics.total_revenue);
}

#[test]
fn funnel_rates_and_values_are_range_invariant() {
    for raw in ["24h", "7d", "30d"] {
        let report = conversion_funnel(&RangeSpec::resolve(Some(raw)));
        let rates: Vec<f64> = report.funnel.iter().map(|s| s.rate).collect();
        assert_eq!(rates, vec![100.0, 5.0, 21.1, 26.4]);
        let values: Vec<u32> = report.funnel.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0, 2000, 8000, 20000]);
        assert_eq!(report.metrics.conversion_rate, 5.8);
        assert_eq!(report.metrics.avg_order_value, 20000);
        assert_eq!(report.metrics.customer_lifetime_value, 35000);
    }
}

#[test]
fn funnel_insights_vary_by_range() {
    let h24 = conversion_funnel(&RangeSpec::resolve(Some("24h")));
    assert_eq!(h24.insights.len(), 3);
    assert_eq!(h24.insights[0], "Today conversion rate is 18% above industry average");
    assert_eq!(h24.insights[1], "Mobile users convert 23% lower than desktop");
    assert_eq!(h24.insights[2], "Last 24 Hours showing strong momentum");

    let d30 = conversion_funnel(&RangeSpec::resolve(Some("30d")));
    assert_eq!(d30.insights[0], "This month conversion rate is 18% above industry average");
    assert_eq!(d30.insights[1], "Case study viewers have 3.2x higher booking rates");
    assert_eq!(d30.insights[2], "Q3 trending 15% higher than Q2");
}

#[test]
fn schema_aggregates_are_constants_for_any_input() {
    // Aggregates are part of the published surface and do not derive from
    // the record list; they must hold even for garbage range keys.
    for raw in [Some("24h"), Some("7d"), Some("30d"), Some("nope"), None] {
        let report = schema_status(&RangeSpec::resolve(raw));
        assert_eq!(report.total, 7);
        assert_eq!(report.valid, 5);
        assert_eq!(report.warnings, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.schemas.len(), 5);
    }
}

#[test]
fn schema_records_shape() {
    let report = schema_status(&RangeSpec::resolve(Some("30d")));

    let person = &report.schemas[0];
    assert_eq!(person.schema_type, "Person");
    assert_eq!(person.status, SchemaHealth::Valid);
    assert!(person.rich_results_showing);
    assert!(person.issues.is_none());
    let perf = person.performance.unwrap();
    assert_eq!(perf.impressions, 4200);
    assert_eq!(perf.clicks, 420);
    assert_eq!(perf.ctr, 10.0);

    let faq = &report.schemas[3];
    assert_eq!(faq.status, SchemaHealth::Warning);
    assert!(faq.performance.is_none());
    assert_eq!(faq.issues.as_ref().unwrap().len(), 2);

    let review = &report.schemas[4];
    assert_eq!(review.status, SchemaHealth::Error);
    assert_eq!(
        review.issues.as_ref().unwrap()[0],
        "Missing reviewRating property"
    );
}

#[test]
fn rich_results_trending_strings() {
    let h24 = schema_status(&RangeSpec::resolve(Some("24h")));
    assert_eq!(h24.rich_results.trending, "+0% vs previous day");

    let d7 = schema_status(&RangeSpec::resolve(Some("7d")));
    assert_eq!(d7.rich_results.trending, "+3% vs previous week");

    let d30 = schema_status(&RangeSpec::resolve(Some("30d")));
    assert_eq!(d30.rich_results.trending, "+12% vs previous month");
    assert_eq!(d30.rich_results.impressions, 12847);
    assert_eq!(d30.rich_results.clicks, 1234);
}

#[test]
fn analytics_scaling_and_constants() {
    let d30 = analytics_overview(&RangeSpec::resolve(Some("30d")));
    assert_eq!(d30.performance.page_views, 15432);
    assert_eq!(d30.performance.sessions, 8247);
    assert_eq!(d30.performance.new_users, 6189);
    assert_eq!(d30.performance.returning_users, 2058);
    assert_eq!(d30.traffic.organic.sessions, 4529);
    assert_eq!(d30.top_pages[0].views, 4532);
    assert_eq!(d30.top_pages[2].conversions, 3);

    let d7 = analytics_overview(&RangeSpec::resolve(Some("7d")));
    // Percentages and durations never scale.
    assert_eq!(d7.performance.bounce_rate, 34.2);
    assert_eq!(d7.performance.avg_session_duration, 142);
    assert_eq!(d7.traffic.organic.percentage, 54.9);
    assert_eq!(d7.traffic.paid.percentage, 9.1);
    // Counts do: 15432 / 0.23 = 67095.65 -> 67096.
    assert_eq!(d7.performance.page_views, 67096);
}

#[test]
fn analytics_insights_vary_by_range() {
    let d7 = analytics_overview(&RangeSpec::resolve(Some("7d")));
    assert_eq!(d7.gtmlevel_insights.len(), 3);
    assert_eq!(
        d7.gtmlevel_insights[1],
        "FAQ schema reduced bounce rate on service pages by 18%"
    );

    let h24 = analytics_overview(&RangeSpec::resolve(Some("24h")));
    assert_eq!(
        h24.gtmlevel_insights[2],
        "Today's mobile performance up 12% vs yesterday"
    );
}

#[test]
fn reports_are_idempotent() {
    for raw in ["24h", "7d", "30d"] {
        let spec = RangeSpec::resolve(Some(raw));
        assert_eq!(schema_status(&spec), schema_status(&spec));
        assert_eq!(conversion_funnel(&spec), conversion_funnel(&spec));
        assert_eq!(analytics_overview(&spec), analytics_overview(&spec));
    }
}
