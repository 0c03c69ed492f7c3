//! PostgreSQL-backed [`EmployeeRepository`].
//!
//! `employee_id` uniqueness is left to the `employees_employee_id_key`
//! constraint; a violation on insert or replace surfaces as
//! [`EmployeePersistenceError::Duplicate`].

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDetails, EmployeeFilters, EmployeeId};

use super::diesel_error_mapping::{
    contains_pattern, is_unique_violation, map_diesel_error, map_pool_error,
};
use super::models::{EmployeeRow, EmployeeValues};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel implementation of [`EmployeeRepository`].
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a repository over the given pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: &PoolError) -> EmployeePersistenceError {
    map_pool_error(error, EmployeePersistenceError::connection)
}

fn diesel_error(error: &DieselError) -> EmployeePersistenceError {
    map_diesel_error(
        error,
        EmployeePersistenceError::query,
        EmployeePersistenceError::connection,
    )
}

/// Like [`diesel_error`], but reports a unique violation against the
/// business identifier being written.
fn write_error(error: &DieselError, details: &EmployeeDetails) -> EmployeePersistenceError {
    if is_unique_violation(error) {
        return EmployeePersistenceError::duplicate(details.employee_id());
    }
    diesel_error(error)
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeePersistenceError> {
    Employee::try_from(row).map_err(|err| {
        EmployeePersistenceError::query(format!("stored employee is invalid: {err}"))
    })
}

/// `employees` restricted to the rows matching every present filter.
pub(crate) fn filtered_employees(filters: &EmployeeFilters) -> employees::BoxedQuery<'_, Pg> {
    let mut query = employees::table.into_boxed();
    if let Some(department) = filters.department.value() {
        query = query.filter(employees::department.eq(department));
    }
    if let Some(profile) = filters.profile.value() {
        query = query.filter(employees::profile.eq(profile));
    }
    if let Some(employee_id) = filters.employee_id.value() {
        query = query.filter(
            employees::employee_id
                .like(contains_pattern(employee_id))
                .escape('\\'),
        );
    }
    if let Some(term) = filters.search.value() {
        query = query.filter(
            employees::employee_name
                .ilike(contains_pattern(term))
                .escape('\\'),
        );
    }
    query
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let row = diesel::insert_into(employees::table)
            .values(EmployeeValues::from(details))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| write_error(&err, details))?;
        row_to_employee(row)
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?
            .map(row_to_employee)
            .transpose()
    }

    async fn list(
        &self,
        filters: &EmployeeFilters,
        page: PageRequest,
    ) -> Result<Page<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let total: i64 = filtered_employees(filters)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        let rows: Vec<EmployeeRow> = filtered_employees(filters)
            .order(employees::id.asc())
            .limit(i64::from(page.limit()))
            .offset(i64::from(page.offset()))
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;

        let items = rows
            .into_iter()
            .map(row_to_employee)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or_default()))
    }

    async fn replace(
        &self,
        id: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        diesel::update(employees::table.find(id.get()))
            .set(EmployeeValues::from(details))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| write_error(&err, details))?
            .map(row_to_employee)
            .transpose()
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let deleted = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Filter;
    use diesel::debug_query;
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;

    fn count_sql(filters: &EmployeeFilters) -> String {
        debug_query::<Pg, _>(&filtered_employees(filters).count()).to_string()
    }

    #[rstest]
    fn search_only_looks_at_employee_name() {
        let sql = count_sql(&EmployeeFilters {
            search: Filter::Present("rao".into()),
            ..EmployeeFilters::default()
        });
        assert!(sql.contains(r#""employees"."employee_name" ILIKE $1"#), "{sql}");
        assert!(!sql.contains(" OR "), "{sql}");
    }

    #[rstest]
    fn all_filters_are_combined() {
        let sql = count_sql(&EmployeeFilters {
            department: Filter::Present("Finance".into()),
            profile: Filter::Present("Analyst".into()),
            employee_id: Filter::Present("E1".into()),
            search: Filter::Present("kir".into()),
        });
        assert!(sql.contains(r#""employees"."department" = $1"#), "{sql}");
        assert!(sql.contains(r#""employees"."profile" = $2"#), "{sql}");
        assert!(sql.contains(r#""employees"."employee_id" LIKE $3"#), "{sql}");
        assert!(sql.contains(r#""employees"."employee_name" ILIKE $5"#), "{sql}");
    }

    #[rstest]
    fn unique_violation_becomes_duplicate() {
        let details = crate::domain::fixtures::employee_details("Kiran Rao", "E100", "Finance");
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );
        assert_eq!(
            write_error(&error, &details),
            EmployeePersistenceError::duplicate("E100")
        );
    }
}
