//! SurrealDB-backed `UserRepository` implementation.
//!
//! Thin adapter: it translates between store documents and domain types and
//! classifies store failures. Duplicate detection relies on the unique email
//! index defined in [`super::schema`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::store::StoreClient;
use super::user_persistence_error_mapping::map_store_error;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserRegistration};

const INSERT_USER: &str = "CREATE type::thing('users', $id) CONTENT $document RETURN NONE";

const FIND_USER_BY_EMAIL: &str = "SELECT record::id(id) AS id, name, email, createdAt, updatedAt \
     FROM users WHERE email = $email LIMIT 1";

const LIST_USERS: &str = "SELECT record::id(id) AS id, name, email, createdAt, updatedAt \
     FROM users ORDER BY createdAt ASC";

/// Document written for a new user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewUserDocument {
    name: String,
    email: String,
    password_hash: String,
    created_at: String,
    updated_at: String,
}

/// Projection read back from the store; never includes `passwordHash`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRow {
    id: String,
    name: String,
    email: String,
    created_at: String,
    updated_at: String,
}

/// Repository over the `users` table.
#[derive(Clone)]
pub struct SurrealUserRepository {
    client: StoreClient,
    clock: Arc<dyn Clock>,
}

impl SurrealUserRepository {
    /// Create a repository stamping documents with `clock`.
    pub fn new(client: StoreClient, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    fn timestamp(&self) -> String {
        self.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, UserPersistenceError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| UserPersistenceError::query(format!("invalid {field} timestamp {raw:?}: {err}")))
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        created_at,
        updated_at,
    } = row;
    let id = UserId::new(id).map_err(|err| UserPersistenceError::query(err.to_string()))?;
    let created_at = parse_timestamp("createdAt", &created_at)?;
    let updated_at = parse_timestamp("updatedAt", &updated_at)?;
    Ok(User::new(id, name, email, created_at, updated_at))
}

#[async_trait]
impl UserRepository for SurrealUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut response = self
            .client
            .query(FIND_USER_BY_EMAIL)
            .bind(("email", email.to_owned()))
            .await
            .map_err(|err| map_store_error(&err, None))?;
        let rows: Vec<UserRow> = response
            .take(0)
            .map_err(|err| map_store_error(&err, None))?;
        rows.into_iter().next().map(row_to_user).transpose()
    }

    async fn insert(
        &self,
        registration: &UserRegistration,
    ) -> Result<UserId, UserPersistenceError> {
        let id = UserId::random();
        let now = self.timestamp();
        let document = NewUserDocument {
            name: registration.name().to_owned(),
            email: registration.email().to_owned(),
            password_hash: registration.password().to_owned(),
            created_at: now.clone(),
            updated_at: now,
        };

        self.client
            .query(INSERT_USER)
            .bind(("id", id.to_string()))
            .bind(("document", document))
            .await
            .and_then(surrealdb::Response::check)
            .map_err(|err| map_store_error(&err, Some(registration.email())))?;

        debug!(user_id = %id, "user document created");
        Ok(id)
    }

    async fn list_excluding_password(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut response = self
            .client
            .query(LIST_USERS)
            .await
            .map_err(|err| map_store_error(&err, None))?;
        let rows: Vec<UserRow> = response
            .take(0)
            .map_err(|err| map_store_error(&err, None))?;
        rows.into_iter().map(row_to_user).collect()
    }
}

#[cfg(test)]
#[path = "surreal_user_repository_tests.rs"]
mod tests;
