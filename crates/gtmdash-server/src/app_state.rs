//! Shared application state.
//!
//! Holds the immutable startup config behind an `Arc`; handlers share it
//! by cloning the state. Nothing here mutates after construction.

use std::sync::Arc;

use crate::config::{Config, Ga4Config};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: Config,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
        }
    }

    pub fn cfg(&self) -> &Config {
        &self.inner.cfg
    }

    pub fn ga4(&self) -> &Ga4Config {
        &self.inner.cfg.ga4
    }
}
