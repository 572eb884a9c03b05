//! Document store persistence adapters.
//!
//! The store is SurrealDB. Adapters here translate between store documents
//! and domain types and never carry business rules:
//!
//! - [`store`] owns connection settings and the connect sequence.
//! - [`schema`] defines the `users` table and its unique email index.
//! - [`SurrealUserRepository`] implements the `UserRepository` port.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ecoscholar_backend::outbound::persistence::{
//!     StoreConfig, SurrealUserRepository, apply_schema, connect,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = connect(&StoreConfig::new("ws://127.0.0.1:8000")).await?;
//! apply_schema(&client).await?;
//! let repository = SurrealUserRepository::new(client, Arc::new(mockable::DefaultClock));
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod schema;
mod store;
mod surreal_user_repository;
mod user_persistence_error_mapping;

pub use schema::apply_schema;
pub use store::{
    STORE_DATABASE, STORE_NAMESPACE, StoreClient, StoreConfig, StoreError, connect, sanitize_url,
};
pub use surreal_user_repository::SurrealUserRepository;
