//! Backend entry-point: reads settings, prepares the document store, and
//! serves the users API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::{DefaultClock, DefaultEnv};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ecoscholar_backend::config::settings_from_env;
use ecoscholar_backend::domain::UserDirectoryService;
use ecoscholar_backend::inbound::http::health::HealthState;
use ecoscholar_backend::inbound::http::state::HttpState;
use ecoscholar_backend::outbound::persistence::{SurrealUserRepository, apply_schema, connect};

use server::{ServerConfig, create_server};

fn startup_error(stage: &'static str, err: &dyn std::error::Error) -> std::io::Error {
    error!(stage, error = %err, "startup failed");
    std::io::Error::other(format!("{stage}: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        settings_from_env(&DefaultEnv::new()).map_err(|err| startup_error("configuration", &err))?;

    let client = connect(&settings.store)
        .await
        .map_err(|err| startup_error("store connection", &err))?;
    apply_schema(&client)
        .await
        .map_err(|err| startup_error("schema", &err))?;

    let repository = SurrealUserRepository::new(client, Arc::new(DefaultClock));
    let service = Arc::new(UserDirectoryService::new(Arc::new(repository)));
    let config = ServerConfig::new(settings.port, HttpState::from_service(service));
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(port = bind_addr.port(), address = %bind_addr, "server listening");
    server.await
}
