//! Driven port for user storage.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{User, UserDetails, UserFilters, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached or no connection was available.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage operations for users.
///
/// Absent rows are reported through `Option` and `bool` results; errors are
/// reserved for storage failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its generated identifier.
    async fn insert(&self, details: &UserDetails) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the user with the highest identifier.
    async fn find_latest(&self) -> Result<Option<User>, UserPersistenceError>;

    /// Return the requested window of users matching `filters`, ordered by
    /// identifier, together with the total number of matches.
    async fn list(
        &self,
        filters: &UserFilters,
        page: PageRequest,
    ) -> Result<Page<User>, UserPersistenceError>;

    /// Overwrite every field of an existing user.
    ///
    /// Returns `None` when no user has the identifier.
    async fn replace(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user. Returns whether a row was deleted.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
