//! In-memory [`UserRepository`].

use std::sync::Mutex;

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use super::{Table, lock};
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserFilters, UserId};

/// Mutex-guarded user table.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<UserDetails>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_user((id, details): (&i32, &UserDetails)) -> User {
    User::new(UserId::new(*id), details.clone())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, details: &UserDetails) -> Result<User, UserPersistenceError> {
        let mut table = lock(&self.table).map_err(UserPersistenceError::query)?;
        let id = table
            .allocate_id()
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        table.rows.insert(id, details.clone());
        Ok(User::new(UserId::new(id), details.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = lock(&self.table).map_err(UserPersistenceError::query)?;
        Ok(table
            .rows
            .get_key_value(&id.get())
            .map(to_user))
    }

    async fn find_latest(&self) -> Result<Option<User>, UserPersistenceError> {
        let table = lock(&self.table).map_err(UserPersistenceError::query)?;
        Ok(table.rows.last_key_value().map(to_user))
    }

    async fn list(
        &self,
        filters: &UserFilters,
        page: PageRequest,
    ) -> Result<Page<User>, UserPersistenceError> {
        let table = lock(&self.table).map_err(UserPersistenceError::query)?;
        let matching: Vec<User> = table
            .rows
            .iter()
            .filter(|(_, details)| filters.matches(details))
            .map(to_user)
            .collect();
        Ok(Page::from_slice(&matching, page))
    }

    async fn replace(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut table = lock(&self.table).map_err(UserPersistenceError::query)?;
        let Some(row) = table.rows.get_mut(&id.get()) else {
            return Ok(None);
        };
        *row = details.clone();
        Ok(Some(User::new(id, details.clone())))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut table = lock(&self.table).map_err(UserPersistenceError::query)?;
        Ok(table.rows.remove(&id.get()).is_some())
    }
}
