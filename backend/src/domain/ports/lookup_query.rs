//! Driving port for the lookup lists.

use async_trait::async_trait;

use crate::domain::{District, Error, State};

/// Read-only access to states and districts.
#[async_trait]
pub trait LookupQuery: Send + Sync {
    /// All states ordered by identifier.
    async fn list_states(&self) -> Result<Vec<State>, Error>;

    /// All districts ordered by identifier.
    async fn list_districts(&self) -> Result<Vec<District>, Error>;
}
