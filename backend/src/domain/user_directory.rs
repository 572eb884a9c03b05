//! User directory service: registration and listing over a user repository.
//!
//! The e-mail pre-check gives callers the specific "already exists" error in
//! the common case. Concurrent registrations can both pass it; the store's
//! unique index then rejects the second insert, which is reported the same
//! way.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    UserPersistenceError, UserRegistrationCommand, UserRepository, UsersQuery,
};
use crate::domain::{Error, User, UserId, UserRegistration};

/// Client-facing message for a duplicate e-mail address.
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";

fn duplicate_email() -> Error {
    Error::invalid_request(EMAIL_ALREADY_EXISTS)
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateEmail { .. } => duplicate_email(),
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

/// Service implementing the registration and listing driving ports.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UserRegistrationCommand for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: UserRegistration) -> Result<UserId, Error> {
        let existing = self
            .repository
            .find_by_email(registration.email())
            .await
            .map_err(|err| {
                error!(error = %err, "email lookup failed during registration");
                map_persistence_error(err)
            })?;
        if existing.is_some() {
            warn!("registration rejected: email already exists");
            return Err(duplicate_email());
        }

        // TODO: hash the password (argon2) before persisting once a password
        // policy is agreed; `passwordHash` currently receives the raw value.
        match self.repository.insert(&registration).await {
            Ok(id) => {
                info!(user_id = %id, "user registered");
                Ok(id)
            }
            Err(err @ UserPersistenceError::DuplicateEmail { .. }) => {
                warn!("registration rejected by the unique email index");
                Err(map_persistence_error(err))
            }
            Err(err) => {
                error!(error = %err, "user insert failed");
                Err(map_persistence_error(err))
            }
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_excluding_password()
            .await
            .map_err(|err| {
                error!(error = %err, "listing users failed");
                map_persistence_error(err)
            })
    }
}

#[cfg(test)]
#[path = "user_directory_tests.rs"]
mod tests;
