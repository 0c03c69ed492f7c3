//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use roster::domain::{EmployeeService, LookupService, UserService};
use roster::inbound::http::state::HttpState;
use roster::outbound::persistence::{
    DbPool, DieselEmployeeRepository, DieselLookupRepository, DieselUserRepository,
};

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(UserService::new(Arc::new(DieselUserRepository::new(
            pool.clone(),
        )))),
        Arc::new(EmployeeService::new(Arc::new(
            DieselEmployeeRepository::new(pool.clone()),
        ))),
        Arc::new(LookupService::new(Arc::new(DieselLookupRepository::new(
            pool.clone(),
        )))),
    )
}

/// Use the PostgreSQL repositories when a pool is available, otherwise the
/// in-memory stores.
pub(super) fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match pool {
        Some(pool) => {
            info!("serving records from PostgreSQL");
            diesel_state(pool)
        }
        None => {
            warn!("no database configured; records are kept in memory");
            HttpState::in_memory()
        }
    };
    web::Data::new(state)
}
