//! Driving port for the registration use-case.
//!
//! HTTP handlers call this port without knowing which repository backs it, so
//! handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserRegistration};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistrationCommand: Send + Sync {
    /// Register a new user and return the identifier the store assigned.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] when the
    /// e-mail address is already registered.
    async fn register(&self, registration: UserRegistration) -> Result<UserId, Error>;
}
