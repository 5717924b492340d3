//! gtmdash server binary.
//!
//! - JSON endpoints: /api/health, /api/ga4/config, /api/schema/status,
//!   /api/conversion/funnel, /api/analytics/overview
//! - Dashboard document at /
//! - CORS open to any origin; per-request tracing

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use gtmdash_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::Config::from_env().expect("config load failed");
    let listen: SocketAddr = cfg
        .listen
        .parse()
        .expect("listen must be a valid SocketAddr");
    let measurement_id = cfg.ga4.measurement_id.clone();

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, %measurement_id, "gtmdash-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
