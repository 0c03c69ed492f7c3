//! PostgreSQL persistence adapters.
//!
//! Repository implementations only translate between Diesel rows and domain
//! records. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use roster::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), roster::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod diesel_error_mapping;
mod diesel_lookup_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_lookup_repository::DieselLookupRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
