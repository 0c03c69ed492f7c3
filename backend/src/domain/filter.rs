//! List query criteria.
//!
//! Each optional criterion is an explicit [`Filter`]. Present criteria are
//! combined with AND; the name search is itself an OR across the name
//! columns. The same predicates are evaluated in memory by
//! [`UserFilters::matches`] and translated to SQL by the Diesel adapters.

use std::num::NonZeroU32;

use pagination::PageRequest;

use super::{EmployeeDetails, UserDetails};

/// Page size used when a user list request omits `limit`.
pub const DEFAULT_USER_LIMIT: NonZeroU32 = NonZeroU32::MIN.saturating_add(4);
/// Page size used when an employee list request omits `limit`.
pub const DEFAULT_EMPLOYEE_LIMIT: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// An optional list criterion.
///
/// # Examples
/// ```
/// use roster::domain::Filter;
///
/// assert_eq!(Filter::from_param(Some("  ".into())), Filter::Absent);
/// assert_eq!(Filter::from_param(Some("F".into())), Filter::Present("F".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// The criterion was not supplied and matches everything.
    #[default]
    Absent,
    /// The criterion was supplied with this value.
    Present(String),
}

impl Filter {
    /// Interpret a raw query parameter; missing or blank values are absent.
    pub fn from_param(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.trim().is_empty() => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// The supplied value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    fn equals(&self, candidate: &str) -> bool {
        self.value().is_none_or(|value| candidate == value)
    }

    fn within(&self, candidate: &str) -> bool {
        self.value().is_none_or(|value| candidate.contains(value))
    }
}

fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Criteria accepted by the user list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    /// Exact match on `gender`.
    pub gender: Filter,
    /// Exact match on `district`.
    pub district: Filter,
    /// Substring match on `phone`.
    pub phone: Filter,
    /// Substring match on `pin`.
    pub pin: Filter,
    /// Case-insensitive substring match on `firstname` or `lastname`.
    pub search: Filter,
}

impl UserFilters {
    /// Whether a user satisfies every present criterion.
    pub fn matches(&self, user: &UserDetails) -> bool {
        self.gender.equals(user.gender())
            && self.district.equals(user.district())
            && self.phone.within(user.phone())
            && self.pin.within(user.pin())
            && self.search.value().is_none_or(|term| {
                contains_ignoring_case(user.firstname(), term)
                    || contains_ignoring_case(user.lastname(), term)
            })
    }
}

/// Criteria accepted by the employee list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilters {
    /// Exact match on `department`.
    pub department: Filter,
    /// Exact match on `profile`.
    pub profile: Filter,
    /// Substring match on the business `employee_id`.
    pub employee_id: Filter,
    /// Case-insensitive substring match on `employee_name`.
    pub search: Filter,
}

impl EmployeeFilters {
    /// Whether an employee satisfies every present criterion.
    pub fn matches(&self, employee: &EmployeeDetails) -> bool {
        self.department.equals(employee.department())
            && self.profile.equals(employee.profile())
            && self.employee_id.within(employee.employee_id())
            && self
                .search
                .value()
                .is_none_or(|term| contains_ignoring_case(employee.employee_name(), term))
    }
}

/// A complete user list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    /// Row predicates.
    pub filters: UserFilters,
    /// Window over the matching rows.
    pub page: PageRequest,
}

/// A complete employee list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListQuery {
    /// Row predicates.
    pub filters: EmployeeFilters,
    /// Window over the matching rows.
    pub page: PageRequest,
}
