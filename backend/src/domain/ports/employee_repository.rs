//! Driven port for employee storage.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Employee, EmployeeDetails, EmployeeFilters, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// The store could not be reached or no connection was available.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } => "employee repository query failed: {message}",
        /// Another employee already holds this business identifier.
        Duplicate { employee_id: String } => "employee_id {employee_id} already exists",
    }
}

/// Storage operations for employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Store a new employee and return it with its generated identifier.
    async fn insert(&self, details: &EmployeeDetails)
    -> Result<Employee, EmployeePersistenceError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Return the requested window of employees matching `filters`, ordered by
    /// identifier, together with the total number of matches.
    async fn list(
        &self,
        filters: &EmployeeFilters,
        page: PageRequest,
    ) -> Result<Page<Employee>, EmployeePersistenceError>;

    /// Overwrite every field of an existing employee.
    ///
    /// Returns `None` when no employee has the identifier.
    async fn replace(
        &self,
        id: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove an employee. Returns whether a row was deleted.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError>;
}
