//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users endpoints, the health endpoints, and the
//! schema wrappers that describe domain types without coupling them to
//! utoipa. The document backs Swagger UI (debug builds) and the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::users::{RegisterUserRequest, UserCreatedResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ECOScholar backend API",
        description = "User registration and listing backed by a document store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorResponse, RegisterUserRequest, UserCreatedResponse)),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
