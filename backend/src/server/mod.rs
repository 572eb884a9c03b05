//! Server construction, middleware wiring, and shutdown draining.

mod config;

pub use config::ServerConfig;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use ecoscholar_backend::doc::ApiDoc;
use ecoscholar_backend::inbound::http::configure;
use ecoscholar_backend::inbound::http::health::HealthState;
use ecoscholar_backend::inbound::http::state::HttpState;
use ecoscholar_backend::middleware::{Trace, permissive_cors};

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().configure(configure(http_state, health_state));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.wrap(permissive_cors()).wrap(Trace)
}

/// Resolves on SIGINT, or SIGTERM on unix. Never resolves if no handler
/// could be installed.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = actix_web::rt::signal::ctrl_c().await {
            warn!(%error, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use actix_web::rt::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => info!(signal = "SIGINT", "shutdown requested"),
        () = terminate => info!(signal = "SIGTERM", "shutdown requested"),
    }
}

/// Once `signal` resolves, fail liveness checks and stop the server after
/// in-flight requests finish.
async fn drain_on(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) {
    signal.await;
    health_state.mark_unhealthy();
    info!("liveness withdrawn, draining connections");
    handle.stop(true).await;
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Actix's own signal handling is replaced by [`drain_on`] so liveness turns
/// 503 before connections close.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_addr)?
        .run();

    actix_web::rt::spawn(drain_on(
        shutdown_signal(),
        health_state.clone(),
        server.handle(),
    ));
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpResponse;

    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let server = HttpServer::new(|| {
            App::new().route("/", web::get().to(|| async { HttpResponse::Ok().finish() }))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port")
        .run();
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain_on(std::future::ready(()), health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server exits cleanly");
    }
}
