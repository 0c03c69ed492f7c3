//! Sample records shared by unit tests.

use super::{EmployeeDetails, EmployeeDraft, UserDetails, UserDraft};

/// A complete user draft with the given name, gender and district.
pub(crate) fn user_draft(first: &str, last: &str, gender: &str, district: &str) -> UserDraft {
    UserDraft {
        firstname: Some(first.to_owned()),
        lastname: Some(last.to_owned()),
        gender: Some(gender.to_owned()),
        phone: Some("9876543210".to_owned()),
        address_line1: Some("12 MG Road".to_owned()),
        address_line2: None,
        pin: Some("411001".to_owned()),
        district: Some(district.to_owned()),
        state: Some("Maharashtra".to_owned()),
    }
}

pub(crate) fn user_details(first: &str, last: &str, gender: &str, district: &str) -> UserDetails {
    UserDetails::try_from(user_draft(first, last, gender, district)).expect("valid user fixture")
}

pub(crate) fn employee_draft(name: &str, employee_id: &str, department: &str) -> EmployeeDraft {
    EmployeeDraft {
        employee_name: Some(name.to_owned()),
        employee_id: Some(employee_id.to_owned()),
        department: Some(department.to_owned()),
        profile: Some("Analyst".to_owned()),
    }
}

pub(crate) fn employee_details(name: &str, employee_id: &str, department: &str) -> EmployeeDetails {
    EmployeeDetails::try_from(employee_draft(name, employee_id, department))
        .expect("valid employee fixture")
}
