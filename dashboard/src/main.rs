//! Dashboard entry-point: loads settings, wires the directory adapter and
//! serves the pages.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{DashboardSettings, ServerConfig, create_server};
use user_dashboard::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DashboardSettings::load_from_iter(std::env::args_os())
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let config = ServerConfig::try_from(&settings).map_err(io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr(),
        upstream = %config.upstream_url(),
        "starting user dashboard"
    );

    let health_state = web::Data::new(HealthState::new());
    let result = create_server(health_state.clone(), config)?.await;
    health_state.mark_unhealthy();
    info!("user dashboard stopped");
    result
}
