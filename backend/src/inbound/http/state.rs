//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserRegistrationCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn UserRegistrationCommand>,
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the users endpoints.
    pub fn new(
        registration: Arc<dyn UserRegistrationCommand>,
        users: Arc<dyn UsersQuery>,
    ) -> Self {
        Self {
            registration,
            users,
        }
    }

    /// Build state from a single service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use ecoscholar_backend::domain::UserDirectoryService;
    /// use ecoscholar_backend::inbound::http::state::HttpState;
    /// use ecoscholar_backend::outbound::persistence::SurrealUserRepository;
    ///
    /// fn wire(repository: SurrealUserRepository) -> HttpState {
    ///     HttpState::from_service(Arc::new(UserDirectoryService::new(Arc::new(repository))))
    /// }
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UserRegistrationCommand + UsersQuery + 'static,
    {
        Self {
            registration: service.clone(),
            users: service,
        }
    }
}
