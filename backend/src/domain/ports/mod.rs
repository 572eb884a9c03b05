//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the document store) and how driving adapters (HTTP handlers) call into
//! the domain. Each port exposes strongly typed errors so adapters map their
//! failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod user_registration_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use user_registration_command::MockUserRegistrationCommand;
pub use user_registration_command::UserRegistrationCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
