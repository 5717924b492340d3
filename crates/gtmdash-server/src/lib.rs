//! gtmdash server library entry.
//!
//! Wires config, app state, the axum router, the JSON API handlers and
//! the dashboard renderer into one service. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod router;
