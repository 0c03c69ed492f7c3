//! Driven port for the state and district lookup tables.

use async_trait::async_trait;

use crate::domain::{District, State};

use super::define_port_error;

define_port_error! {
    /// Failures raised by lookup repository adapters.
    pub enum LookupPersistenceError {
        /// The store could not be reached or no connection was available.
        Connection { message: String } => "lookup repository connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } => "lookup repository query failed: {message}",
    }
}

/// Read access to the lookup tables, each ordered by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// Every state.
    async fn states(&self) -> Result<Vec<State>, LookupPersistenceError>;

    /// Every district.
    async fn districts(&self) -> Result<Vec<District>, LookupPersistenceError>;
}
