//! User use-cases backed by a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use tracing::info;

use crate::domain::ports::{UserDirectory, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDetails, UserId, UserListQuery};

/// Message returned whenever a user lookup misses.
pub const USER_NOT_FOUND: &str = "User not found!";

/// Service implementing [`UserDirectory`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service over the given repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

#[async_trait]
impl<R> UserDirectory for UserService<R>
where
    R: UserRepository,
{
    async fn create(&self, details: UserDetails) -> Result<User, Error> {
        let user = self
            .repository
            .insert(&details)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }

    async fn get_last(&self) -> Result<User, Error> {
        self.repository
            .find_latest()
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }

    async fn list(&self, query: UserListQuery) -> Result<Page<User>, Error> {
        self.repository
            .list(&query.filters, query.page)
            .await
            .map_err(map_persistence_error)
    }

    async fn update(&self, id: UserId, details: UserDetails) -> Result<User, Error> {
        let user = self
            .repository
            .replace(id, &details)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)?;
        info!(user_id = %id, "user replaced");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(not_found());
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
