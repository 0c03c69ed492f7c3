//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Rows read back from the
//! database are converted through the domain drafts so a stored value that
//! no longer satisfies the column rules surfaces as a query error.

use diesel::prelude::*;

use crate::domain::{
    District, Employee, EmployeeDetails, EmployeeDraft, EmployeeId, FieldError, State, User,
    UserDetails, UserDraft, UserId,
};

use super::schema::{districts, employees, states, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub gender: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub pin: String,
    pub district: String,
    pub state: String,
}

impl TryFrom<UserRow> for User {
    type Error = FieldError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let details = UserDetails::try_from(UserDraft {
            firstname: Some(row.firstname),
            lastname: Some(row.lastname),
            gender: Some(row.gender),
            phone: Some(row.phone),
            address_line1: Some(row.address_line1),
            address_line2: row.address_line2,
            pin: Some(row.pin),
            district: Some(row.district),
            state: Some(row.state),
        })?;
        Ok(Self::new(UserId::new(row.id), details))
    }
}

/// Column values written on insert and on full replace.
///
/// `treat_none_as_null` makes a replace clear `address_line2` when the new
/// details omit it.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserValues<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub gender: &'a str,
    pub phone: &'a str,
    pub address_line1: &'a str,
    pub address_line2: Option<&'a str>,
    pub pin: &'a str,
    pub district: &'a str,
    pub state: &'a str,
}

impl<'a> From<&'a UserDetails> for UserValues<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            firstname: details.firstname(),
            lastname: details.lastname(),
            gender: details.gender(),
            phone: details.phone(),
            address_line1: details.address_line1(),
            address_line2: details.address_line2(),
            pin: details.pin(),
            district: details.district(),
            state: details.state(),
        }
    }
}

/// Row read from `employees`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub profile: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = FieldError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let details = EmployeeDetails::try_from(EmployeeDraft {
            employee_name: Some(row.employee_name),
            employee_id: Some(row.employee_id),
            department: Some(row.department),
            profile: Some(row.profile),
        })?;
        Ok(Self::new(EmployeeId::new(row.id), details))
    }
}

/// Column values written on insert and on full replace.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeValues<'a> {
    pub employee_name: &'a str,
    pub employee_id: &'a str,
    pub department: &'a str,
    pub profile: &'a str,
}

impl<'a> From<&'a EmployeeDetails> for EmployeeValues<'a> {
    fn from(details: &'a EmployeeDetails) -> Self {
        Self {
            employee_name: details.employee_name(),
            employee_id: details.employee_id(),
            department: details.department(),
            profile: details.profile(),
        }
    }
}

/// Row read from `states`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = states)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StateRow {
    pub id: i32,
    pub name: String,
}

impl From<StateRow> for State {
    fn from(row: StateRow) -> Self {
        Self::new(row.id, row.name)
    }
}

/// Row read from `districts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = districts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DistrictRow {
    pub id: i32,
    pub name: String,
}

impl From<DistrictRow> for District {
    fn from(row: DistrictRow) -> Self {
        Self::new(row.id, row.name)
    }
}
