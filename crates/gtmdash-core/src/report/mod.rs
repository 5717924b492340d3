//! Report computations behind the JSON endpoints.
//!
//! Each function takes a resolved [`RangeSpec`](crate::range::RangeSpec)
//! and returns a serializable report. All counts are fixed monthly
//! baselines divided by the range multiplier and rounded; percentages,
//! rates and CTRs are ratios and therefore range-invariant. Nothing here
//! touches the clock or any external state, so a given range always
//! produces the identical report.

mod analytics;
mod funnel;
mod schema;

pub use analytics::{analytics_overview, AnalyticsReport, ChannelStat, PageStat, SitePerformance, TrafficChannels};
pub use funnel::{conversion_funnel, ConversionReport, FunnelStep, RevenueMetrics, SourceBreakdown};
pub use schema::{schema_status, RichResults, SchemaHealth, SchemaPerformance, SchemaRecord, SchemaStatusReport};
