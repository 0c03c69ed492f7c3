//! In-memory [`EmployeeRepository`] enforcing `employee_id` uniqueness.

use std::sync::Mutex;

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use super::{Table, lock};
use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDetails, EmployeeFilters, EmployeeId};

/// Mutex-guarded employee table.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table<EmployeeDetails>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fail when a row other than `except` already uses the business identifier.
fn ensure_unique(
    table: &Table<EmployeeDetails>,
    details: &EmployeeDetails,
    except: Option<i32>,
) -> Result<(), EmployeePersistenceError> {
    let taken = table.rows.iter().any(|(id, row)| {
        Some(*id) != except && row.employee_id() == details.employee_id()
    });
    if taken {
        return Err(EmployeePersistenceError::duplicate(details.employee_id()));
    }
    Ok(())
}

fn to_employee((id, details): (&i32, &EmployeeDetails)) -> Employee {
    Employee::new(EmployeeId::new(*id), details.clone())
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let mut table = lock(&self.table).map_err(EmployeePersistenceError::query)?;
        ensure_unique(&table, details, None)?;
        let id = table
            .allocate_id()
            .ok_or_else(|| EmployeePersistenceError::query("employee id sequence exhausted"))?;
        table.rows.insert(id, details.clone());
        Ok(Employee::new(EmployeeId::new(id), details.clone()))
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let table = lock(&self.table).map_err(EmployeePersistenceError::query)?;
        Ok(table.rows.get_key_value(&id.get()).map(to_employee))
    }

    async fn list(
        &self,
        filters: &EmployeeFilters,
        page: PageRequest,
    ) -> Result<Page<Employee>, EmployeePersistenceError> {
        let table = lock(&self.table).map_err(EmployeePersistenceError::query)?;
        let matching: Vec<Employee> = table
            .rows
            .iter()
            .filter(|(_, details)| filters.matches(details))
            .map(to_employee)
            .collect();
        Ok(Page::from_slice(&matching, page))
    }

    async fn replace(
        &self,
        id: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut table = lock(&self.table).map_err(EmployeePersistenceError::query)?;
        if !table.rows.contains_key(&id.get()) {
            return Ok(None);
        }
        ensure_unique(&table, details, Some(id.get()))?;
        table.rows.insert(id.get(), details.clone());
        Ok(Some(Employee::new(id, details.clone())))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError> {
        let mut table = lock(&self.table).map_err(EmployeePersistenceError::query)?;
        Ok(table.rows.remove(&id.get()).is_some())
    }
}
