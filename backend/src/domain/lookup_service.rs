//! Lookup list use-cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{LookupPersistenceError, LookupQuery, LookupRepository};
use crate::domain::{District, Error, State};

/// Service implementing [`LookupQuery`].
#[derive(Clone)]
pub struct LookupService<R> {
    repository: Arc<R>,
}

impl<R> LookupService<R> {
    /// Create a service over the given repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: LookupPersistenceError) -> Error {
    match error {
        LookupPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("lookup repository unavailable: {message}"))
        }
        LookupPersistenceError::Query { message } => {
            Error::internal(format!("lookup repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> LookupQuery for LookupService<R>
where
    R: LookupRepository,
{
    async fn list_states(&self) -> Result<Vec<State>, Error> {
        self.repository.states().await.map_err(map_persistence_error)
    }

    async fn list_districts(&self) -> Result<Vec<District>, Error> {
        self.repository
            .districts()
            .await
            .map_err(map_persistence_error)
    }
}
