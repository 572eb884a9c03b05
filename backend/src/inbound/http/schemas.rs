//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
///
/// Stored user as returned by `GET /api/users`. The password is never part
/// of this shape.
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Unique e-mail address.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Creation time (RFC 3339).
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T09:30:00.000Z")]
    created_at: String,
    /// Last modification time (RFC 3339).
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T09:30:00.000Z")]
    updated_at: String,
}
