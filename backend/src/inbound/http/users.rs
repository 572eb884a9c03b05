//! Users API handlers.
//!
//! ```text
//! POST /api/users {"name":"Ada","email":"ada@example.com","password":"secret"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Error, RegistrationValidationError, User, UserRegistration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Message returned alongside the new identifier.
pub const USER_CREATED_MESSAGE: &str = "User created";

/// Registration request body for `POST /api/users`.
///
/// Fields are optional at the wire level so a missing field reaches domain
/// validation instead of failing JSON extraction. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

impl TryFrom<RegisterUserRequest> for UserRegistration {
    type Error = RegistrationValidationError;

    fn try_from(value: RegisterUserRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref(),
            value.email.as_deref(),
            value.password.as_deref(),
        )
    }
}

/// Body of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserCreatedResponse {
    #[schema(example = "User created")]
    pub message: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

// Missing fields are a store-side rejection for clients, hence internal.
fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    warn!(error = %err, "registration rejected before reaching the store");
    Error::internal(err.to_string())
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Email already exists or body is not JSON", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let registration = UserRegistration::try_from(payload.into_inner())
        .map_err(map_registration_validation_error)?;
    let id = state.registration.register(registration).await?;
    Ok(HttpResponse::Created().json(UserCreatedResponse {
        message: USER_CREATED_MESSAGE.to_owned(),
        id: id.to_string(),
    }))
}

/// List every registered user without password data.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}
