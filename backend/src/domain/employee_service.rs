//! Employee use-cases backed by an [`EmployeeRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use tracing::info;

use crate::domain::ports::{EmployeeDirectory, EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDetails, EmployeeId, EmployeeListQuery, Error};

/// Message returned whenever an employee lookup misses.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found!";

/// Service implementing [`EmployeeDirectory`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a service over the given repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: EmployeePersistenceError) -> Error {
    match error {
        EmployeePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeePersistenceError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeePersistenceError::Duplicate { employee_id } => Error::internal(format!(
            "employee_id {employee_id} violates the unique constraint"
        )),
    }
}

fn not_found() -> Error {
    Error::not_found(EMPLOYEE_NOT_FOUND)
}

#[async_trait]
impl<R> EmployeeDirectory for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, Error> {
        let employee = self
            .repository
            .insert(&details)
            .await
            .map_err(map_persistence_error)?;
        info!(employee_id = %employee.id(), "employee created");
        Ok(employee)
    }

    async fn get(&self, id: EmployeeId) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }

    async fn list(&self, query: EmployeeListQuery) -> Result<Page<Employee>, Error> {
        self.repository
            .list(&query.filters, query.page)
            .await
            .map_err(map_persistence_error)
    }

    async fn update(&self, id: EmployeeId, details: EmployeeDetails) -> Result<Employee, Error> {
        let employee = self
            .repository
            .replace(id, &details)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)?;
        info!(employee_id = %id, "employee replaced");
        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), Error> {
        if !self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?
        {
            return Err(not_found());
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
