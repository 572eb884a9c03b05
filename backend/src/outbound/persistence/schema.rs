//! Schema definitions applied to the document store at startup.

use tracing::info;

use super::store::{StoreClient, StoreError};

/// Table holding one document per registered user.
pub(crate) const USERS_TABLE: &str = "users";

/// Unique index guarding the `email` field of [`USERS_TABLE`].
pub(crate) const EMAIL_UNIQUE_INDEX: &str = "users_email_unique";

// Every field is a required string; a document missing any of them is
// rejected by the store. Timestamps are RFC 3339 strings.
const USERS_SCHEMA: &str = r"
DEFINE TABLE IF NOT EXISTS users SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON TABLE users TYPE string;
DEFINE FIELD IF NOT EXISTS email ON TABLE users TYPE string;
DEFINE FIELD IF NOT EXISTS passwordHash ON TABLE users TYPE string;
DEFINE FIELD IF NOT EXISTS createdAt ON TABLE users TYPE string;
DEFINE FIELD IF NOT EXISTS updatedAt ON TABLE users TYPE string;
DEFINE INDEX IF NOT EXISTS users_email_unique ON TABLE users FIELDS email UNIQUE;
";

/// Define the users table, its fields, and the unique email index.
///
/// Idempotent: re-running against an initialised database is a no-op.
///
/// # Errors
/// Returns [`StoreError::Schema`] when any definition statement fails.
pub async fn apply_schema(client: &StoreClient) -> Result<(), StoreError> {
    client
        .query(USERS_SCHEMA)
        .await
        .and_then(surrealdb::Response::check)
        .map_err(|err| StoreError::Schema {
            message: err.to_string(),
        })?;
    info!(table = USERS_TABLE, index = EMAIL_UNIQUE_INDEX, "user schema applied");
    Ok(())
}
