//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;

use self::health::HealthState;
use self::state::HttpState;

/// JSON extractor configuration mapping unreadable bodies to
/// `400 {"error": "Invalid request body"}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Mount every route on an `App` or scope, together with the state the
/// handlers extract. Hosts need nothing registered beforehand.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use ecoscholar_backend::inbound::http::{configure, health::HealthState, state::HttpState};
///
/// fn app(state: HttpState, health: web::Data<HealthState>) -> App<
///     impl actix_web::dev::ServiceFactory<
///         actix_web::dev::ServiceRequest,
///         Config = (),
///         Response = actix_web::dev::ServiceResponse,
///         Error = actix_web::Error,
///         InitError = (),
///     >,
/// > {
///     App::new().configure(configure(state, health))
/// }
/// ```
pub fn configure(
    state: HttpState,
    health: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(health)
            .app_data(json_config())
            .service(health::root)
            .service(health::live)
            .service(health::ready)
            .service(
                web::scope("/api")
                    .service(users::register_user)
                    .service(users::list_users),
            );
    }
}
