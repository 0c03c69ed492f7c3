//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by storage adapters and
//! report failures through typed error enums. Driving ports (`*Directory`,
//! [`LookupQuery`]) are implemented by the domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employee_repository;
mod lookup_query;
mod lookup_repository;
mod user_directory;
mod user_repository;

pub use employee_directory::EmployeeDirectory;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
pub use lookup_query::LookupQuery;
#[cfg(test)]
pub use lookup_repository::MockLookupRepository;
pub use lookup_repository::{LookupPersistenceError, LookupRepository};
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
