//! PostgreSQL-backed [`LookupRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LookupPersistenceError, LookupRepository};
use crate::domain::{District, State};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DistrictRow, StateRow};
use super::pool::DbPool;
use super::schema::{districts, states};

/// Diesel implementation of [`LookupRepository`].
#[derive(Clone)]
pub struct DieselLookupRepository {
    pool: DbPool,
}

impl DieselLookupRepository {
    /// Create a repository over the given pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: &diesel::result::Error) -> LookupPersistenceError {
    map_diesel_error(
        error,
        LookupPersistenceError::query,
        LookupPersistenceError::connection,
    )
}

#[async_trait]
impl LookupRepository for DieselLookupRepository {
    async fn states(&self) -> Result<Vec<State>, LookupPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, LookupPersistenceError::connection))?;
        let rows: Vec<StateRow> = states::table
            .order(states::id.asc())
            .select(StateRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn districts(&self) -> Result<Vec<District>, LookupPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, LookupPersistenceError::connection))?;
        let rows: Vec<DistrictRow> = districts::table
            .order(districts::id.asc())
            .select(DistrictRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err))?;
        Ok(rows.into_iter().map(District::from).collect())
    }
}
