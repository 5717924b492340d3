//! Shared error type across gtmdash crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, DashError>;

/// Unified error type used by core and server.
///
/// The report computations are total over their inputs, so errors only
/// arise from configuration and process startup.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("config: {0}")]
    Config(String),
}
