//! PostgreSQL-backed [`UserRepository`].
//!
//! List queries are assembled from the present filters on a boxed Diesel
//! query. The same predicate set feeds both the `COUNT(*)` that yields the
//! total and the ordered `LIMIT`/`OFFSET` page.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserFilters, UserId};

use super::diesel_error_mapping::{contains_pattern, map_diesel_error, map_pool_error};
use super::models::{UserRow, UserValues};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over the given pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: &PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn diesel_error(error: &diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row)
        .map_err(|err| UserPersistenceError::query(format!("stored user is invalid: {err}")))
}

/// `users` restricted to the rows matching every present filter.
pub(crate) fn filtered_users(filters: &UserFilters) -> users::BoxedQuery<'_, Pg> {
    let mut query = users::table.into_boxed();
    if let Some(gender) = filters.gender.value() {
        query = query.filter(users::gender.eq(gender));
    }
    if let Some(district) = filters.district.value() {
        query = query.filter(users::district.eq(district));
    }
    if let Some(phone) = filters.phone.value() {
        query = query.filter(users::phone.like(contains_pattern(phone)).escape('\\'));
    }
    if let Some(pin) = filters.pin.value() {
        query = query.filter(users::pin.like(contains_pattern(pin)).escape('\\'));
    }
    if let Some(term) = filters.search.value() {
        let pattern = contains_pattern(term);
        query = query.filter(
            users::firstname
                .ilike(pattern.clone())
                .escape('\\')
                .or(users::lastname.ilike(pattern).escape('\\')),
        );
    }
    query
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, details: &UserDetails) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let row = diesel::insert_into(users::table)
            .values(UserValues::from(details))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        row_to_user(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?
            .map(row_to_user)
            .transpose()
    }

    async fn find_latest(&self) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        users::table
            .order(users::id.desc())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?
            .map(row_to_user)
            .transpose()
    }

    async fn list(
        &self,
        filters: &UserFilters,
        page: PageRequest,
    ) -> Result<Page<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let total: i64 = filtered_users(filters)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        let rows: Vec<UserRow> = filtered_users(filters)
            .order(users::id.asc())
            .limit(i64::from(page.limit()))
            .offset(i64::from(page.offset()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;

        let items = rows
            .into_iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, u64::try_from(total).unwrap_or_default()))
    }

    async fn replace(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        diesel::update(users::table.find(id.get()))
            .set(UserValues::from(details))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| diesel_error(&err))?
            .map(row_to_user)
            .transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| pool_error(&err))?;
        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! SQL shape checks for the user list query.

    use super::*;
    use crate::domain::Filter;
    use diesel::debug_query;
    use rstest::rstest;

    fn present(value: &str) -> Filter {
        Filter::Present(value.to_owned())
    }

    fn count_sql(filters: &UserFilters) -> String {
        debug_query::<Pg, _>(&filtered_users(filters).count()).to_string()
    }

    #[rstest]
    fn no_filters_means_no_where_clause() {
        let sql = count_sql(&UserFilters::default());
        assert!(sql.contains("COUNT(*)"), "{sql}");
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[rstest]
    fn exact_filters_are_conjunctive_equalities() {
        let sql = count_sql(&UserFilters {
            gender: present("F"),
            district: present("Pune"),
            ..UserFilters::default()
        });
        assert!(sql.contains(r#""users"."gender" = $1"#), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
        assert!(sql.contains(r#""users"."district" = $2"#), "{sql}");
    }

    #[rstest]
    fn substring_filters_use_escaped_like() {
        let sql = count_sql(&UserFilters {
            phone: present("98_"),
            ..UserFilters::default()
        });
        assert!(sql.contains(r#""users"."phone" LIKE $1 ESCAPE $2"#), "{sql}");
        assert!(sql.contains(r#""%98\\_%""#), "{sql}");
    }

    #[rstest]
    fn search_is_a_disjunction_over_names() {
        let sql = count_sql(&UserFilters {
            gender: present("M"),
            search: present("ash"),
            ..UserFilters::default()
        });
        assert!(sql.contains(r#""users"."gender" = $1"#), "{sql}");
        assert!(sql.contains(r#""users"."firstname" ILIKE $2 ESCAPE $3"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains(r#""users"."lastname" ILIKE $4 ESCAPE $5"#), "{sql}");
    }

    #[rstest]
    fn page_query_orders_by_id_and_windows() {
        let filters = UserFilters::default();
        let query = filtered_users(&filters)
            .order(users::id.asc())
            .limit(5)
            .offset(10)
            .select(UserRow::as_select());
        let sql = debug_query::<Pg, _>(&query).to_string();
        assert!(sql.contains(r#"ORDER BY "users"."id" ASC"#), "{sql}");
        assert!(sql.contains("LIMIT $1 OFFSET $2"), "{sql}");
    }
}
