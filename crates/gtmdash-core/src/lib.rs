//! gtmdash core library.
//!
//! Pure domain logic for the dashboard: time-range resolution and the
//! report computations behind the JSON endpoints. No async, no HTTP;
//! everything here is deterministic given its inputs so the server crate
//! and its tests can call it directly.

pub mod error;
pub mod range;
pub mod report;
