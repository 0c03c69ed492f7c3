//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! the driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeDirectory, LookupQuery, UserDirectory};
use crate::domain::{EmployeeService, LookupService, UserService};
use crate::outbound::memory::{
    InMemoryEmployeeRepository, InMemoryLookupRepository, InMemoryUserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub employees: Arc<dyn EmployeeDirectory>,
    pub lookups: Arc<dyn LookupQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        employees: Arc<dyn EmployeeDirectory>,
        lookups: Arc<dyn LookupQuery>,
    ) -> Self {
        Self {
            users,
            employees,
            lookups,
        }
    }

    /// State backed by empty in-memory stores and the seeded lookup lists.
    ///
    /// # Examples
    /// ```
    /// use roster::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _users = state.users.clone();
    /// ```
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
            Arc::new(EmployeeService::new(Arc::new(
                InMemoryEmployeeRepository::new(),
            ))),
            Arc::new(LookupService::new(Arc::new(
                InMemoryLookupRepository::seeded(),
            ))),
        )
    }
}
