//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::DashboardSettings;

use std::io;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use user_dashboard::Trace;
use user_dashboard::inbound::http::health::{HealthState, live, ready};
use user_dashboard::inbound::http::state::HttpState;
use user_dashboard::inbound::http::users::{detail_page, list_page};
use user_dashboard::outbound::directory::{DirectoryHttpIdentity, UserDirectoryHttpSource};

fn build_http_state(config: &ServerConfig) -> io::Result<HttpState> {
    let source = UserDirectoryHttpSource::with_identity(
        config.upstream_url.clone(),
        config.request_timeout,
        DirectoryHttpIdentity {
            user_agent: config.user_agent.clone(),
        },
    )
    .map_err(|error| io::Error::other(format!("build directory client: {error}")))?;
    Ok(HttpState::new(Arc::new(source)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_page)
        .service(detail_page)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The returned [`Server`] must be awaited to drive the listener; readiness
/// is marked once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the directory client cannot be built
/// or binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
