//! Driving port for user use-cases.
//!
//! HTTP handlers call this port; implementations translate storage outcomes
//! into domain [`Error`]s so adapters never see persistence failures.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Error, User, UserDetails, UserId, UserListQuery};

/// User create, read, update and delete operations.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Store a new user.
    async fn create(&self, details: UserDetails) -> Result<User, Error>;

    /// Fetch one user; not-found when the identifier is unknown.
    async fn get(&self, id: UserId) -> Result<User, Error>;

    /// Fetch the most recently created user; not-found when there are none.
    async fn get_last(&self) -> Result<User, Error>;

    /// Filtered, counted and paginated list.
    async fn list(&self, query: UserListQuery) -> Result<Page<User>, Error>;

    /// Replace every field of an existing user.
    async fn update(&self, id: UserId, details: UserDetails) -> Result<User, Error>;

    /// Remove an existing user.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
