//! Time-range resolution.
//!
//! Maps a client-selected range key (24h / 7d / 30d) to a display label
//! and the multiplier applied to monthly baseline figures. Resolution is
//! total over its input domain: unknown or missing keys fall back to the
//! 30-day spec, never an error.

use serde::Serialize;

/// Client-selected time window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeKey {
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "30d")]
    D30,
}

impl RangeKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeKey::H24 => "24h",
            RangeKey::D7 => "7d",
            RangeKey::D30 => "30d",
        }
    }
}

/// Resolved range: key plus the constants derived from it.
///
/// Invariant: `multiplier > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub key: RangeKey,
    pub label: &'static str,
    pub multiplier: f64,
    pub suffix: &'static str,
}

const H24: RangeSpec = RangeSpec {
    key: RangeKey::H24,
    label: "Last 24 Hours",
    multiplier: 0.033, // ~1/30th of monthly data
    suffix: "today",
};

const D7: RangeSpec = RangeSpec {
    key: RangeKey::D7,
    label: "Last 7 Days",
    multiplier: 0.23, // ~1/4th of monthly data
    suffix: "this week",
};

const D30: RangeSpec = RangeSpec {
    key: RangeKey::D30,
    label: "Last 30 Days",
    multiplier: 1.0,
    suffix: "this month",
};

impl RangeSpec {
    /// Resolve a raw query value. Total: anything unrecognized (or no
    /// value at all) yields the 30-day spec.
    pub fn resolve(raw: Option<&str>) -> RangeSpec {
        match raw {
            Some("24h") => H24,
            Some("7d") => D7,
            _ => D30,
        }
    }

    /// Scale a monthly baseline down to this range, rounding half away
    /// from zero. Applied independently per field; related fields are
    /// not kept mutually consistent.
    pub fn scale(&self, baseline: f64) -> u64 {
        (baseline / self.multiplier).round() as u64
    }

    /// The period name used in "vs previous ..." trending strings.
    pub fn previous_period(&self) -> &'static str {
        match self.key {
            RangeKey::H24 => "day",
            RangeKey::D7 => "week",
            RangeKey::D30 => "month",
        }
    }

    /// Suffix with its first letter upper-cased ("This week", "Today").
    pub fn suffix_capitalized(&self) -> String {
        let mut chars = self.suffix.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}
