//! Driving port for employee use-cases.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Employee, EmployeeDetails, EmployeeId, EmployeeListQuery, Error};

/// Employee create, read, update and delete operations.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Store a new employee; a taken `employee_id` is a server error.
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Fetch one employee; not-found when the identifier is unknown.
    async fn get(&self, id: EmployeeId) -> Result<Employee, Error>;

    /// Filtered, counted and paginated list.
    async fn list(&self, query: EmployeeListQuery) -> Result<Page<Employee>, Error>;

    /// Replace every field of an existing employee.
    async fn update(&self, id: EmployeeId, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Remove an existing employee.
    async fn delete(&self, id: EmployeeId) -> Result<(), Error>;
}
