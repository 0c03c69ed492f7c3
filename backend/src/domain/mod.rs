//! Domain records, list criteria, ports and services.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`], [`Employee`], [`State`], [`District`]: stored records.
//! - [`UserFilters`], [`EmployeeFilters`]: list criteria built from [`Filter`]s.
//! - [`UserService`], [`EmployeeService`], [`LookupService`]: implementations of
//!   the driving ports in [`ports`].

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod field;
pub mod filter;
pub mod lookup;
pub mod lookup_service;
pub mod ports;
pub mod user;
pub mod user_service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::employee::{Employee, EmployeeDetails, EmployeeDraft, EmployeeId};
pub use self::employee_service::{EMPLOYEE_NOT_FOUND, EmployeeService};
pub use self::error::{Error, ErrorCode};
pub use self::field::FieldError;
pub use self::filter::{
    DEFAULT_EMPLOYEE_LIMIT, DEFAULT_USER_LIMIT, EmployeeFilters, EmployeeListQuery, Filter,
    UserFilters, UserListQuery,
};
pub use self::lookup::{District, State};
pub use self::lookup_service::LookupService;
pub use self::user::{User, UserDetails, UserDraft, UserId};
pub use self::user_service::{USER_NOT_FOUND, UserService};

/// Result alias used by HTTP handlers.
///
/// # Examples
/// ```
/// use roster::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User not found!"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
