//! Server config from environment-style lookups.
//!
//! Built once at startup and passed into the state/router/renderer; no
//! global access from deep call sites. Every field has a literal default
//! so the binary runs with an empty environment.

use std::net::SocketAddr;

use gtmdash_core::error::{DashError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address, `host:port`.
    pub listen: String,
    pub ga4: Ga4Config,
}

/// Analytics stream identity echoed by `/api/ga4/config` and embedded in
/// the dashboard document.
#[derive(Debug, Clone)]
pub struct Ga4Config {
    pub measurement_id: String,
    pub stream_url: String,
    pub stream_id: String,
}

impl Ga4Config {
    pub fn configured(&self) -> bool {
        !self.measurement_id.is_empty()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary lookup so tests can inject values without
    /// touching process env. `LISTEN` takes the full address; `PORT`
    /// alone (deployment convention) overrides only the port.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen = match get("LISTEN") {
            Some(addr) => addr,
            None => match get("PORT") {
                Some(port) => format!("0.0.0.0:{port}"),
                None => default_listen(),
            },
        };

        let cfg = Self {
            listen,
            ga4: Ga4Config {
                measurement_id: get("GA4_MEASUREMENT_ID").unwrap_or_else(default_measurement_id),
                stream_url: get("GTM_EXPERT_STREAM_URL").unwrap_or_else(default_stream_url),
                stream_id: get("GA4_STREAM_ID").unwrap_or_else(default_stream_id),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<SocketAddr>()
            .map_err(|e| DashError::Config(format!("listen must be host:port: {e}")))?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_measurement_id() -> String {
    "G-RLP375LHWY".into()
}
fn default_stream_url() -> String {
    "https://gtmexpert.com".into()
}
fn default_stream_id() -> String {
    "11226420890".into()
}
