//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId, UserRegistration};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Store connection could not be established or was lost.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store's unique e-mail index rejected an insert.
        DuplicateEmail { email: String } => "user with email {email} already exists",
    }
}

/// Driven port over the `users` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the record whose e-mail matches exactly, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new record and return its assigned identifier.
    ///
    /// The submitted password is written to `passwordHash` unchanged.
    async fn insert(&self, registration: &UserRegistration)
    -> Result<UserId, UserPersistenceError>;

    /// Fetch every record, projecting out the password field.
    async fn list_excluding_password(&self) -> Result<Vec<User>, UserPersistenceError>;
}
