//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module is their common home for cluster bootstrap, database provisioning
//! and record builders.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{drop_table, provision_template_database};

use roster::domain::{EmployeeDetails, EmployeeDraft, UserDetails, UserDraft};

/// Render a `postgres` error with its SQLSTATE and detail when available.
///
/// `postgres::Error`'s `Display` often collapses to `db error`, which hides
/// the message CI logs need.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

pub fn user(first: &str, last: &str, gender: &str, district: &str) -> UserDetails {
    UserDetails::try_from(UserDraft {
        firstname: Some(first.to_owned()),
        lastname: Some(last.to_owned()),
        gender: Some(gender.to_owned()),
        phone: Some("9876543210".to_owned()),
        address_line1: Some("12 MG Road".to_owned()),
        address_line2: None,
        pin: Some("411001".to_owned()),
        district: Some(district.to_owned()),
        state: Some("Maharashtra".to_owned()),
    })
    .expect("valid user fixture")
}

pub fn employee(name: &str, employee_id: &str, department: &str) -> EmployeeDetails {
    EmployeeDetails::try_from(EmployeeDraft {
        employee_name: Some(name.to_owned()),
        employee_id: Some(employee_id.to_owned()),
        department: Some(department.to_owned()),
        profile: Some("Analyst".to_owned()),
    })
    .expect("valid employee fixture")
}
