//! Employee records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::field::{FieldError, required};

/// Maximum widths of the employee columns.
pub mod widths {
    /// `employee_name`.
    pub const NAME: usize = 50;
    /// `employee_id`, the business identifier.
    pub const EMPLOYEE_ID: usize = 10;
    /// `department` and `profile`.
    pub const ORG: usize = 50;
}

/// Generated row identifier, distinct from the business `employee_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unvalidated employee fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDraft {
    #[schema(example = "Kiran Rao")]
    pub employee_name: Option<String>,
    #[schema(example = "E100")]
    pub employee_id: Option<String>,
    #[schema(example = "Finance")]
    pub department: Option<String>,
    #[schema(example = "Analyst")]
    pub profile: Option<String>,
}

/// Validated employee fields.
///
/// `employee_id` must be unique across all employees; the repository
/// enforces that when the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeDetails {
    employee_name: String,
    employee_id: String,
    department: String,
    profile: String,
}

impl TryFrom<EmployeeDraft> for EmployeeDetails {
    type Error = FieldError;

    fn try_from(draft: EmployeeDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_name: required("employee_name", draft.employee_name, widths::NAME)?,
            employee_id: required("employee_id", draft.employee_id, widths::EMPLOYEE_ID)?,
            department: required("department", draft.department, widths::ORG)?,
            profile: required("profile", draft.profile, widths::ORG)?,
        })
    }
}

impl From<EmployeeDetails> for EmployeeDraft {
    fn from(details: EmployeeDetails) -> Self {
        Self {
            employee_name: Some(details.employee_name),
            employee_id: Some(details.employee_id),
            department: Some(details.department),
            profile: Some(details.profile),
        }
    }
}

impl EmployeeDetails {
    /// Display name.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Business identifier, unique per employee.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Department name.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Job profile.
    pub fn profile(&self) -> &str {
        &self.profile
    }
}

/// A stored employee, serialised flat like [`crate::domain::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Employee {
    id: EmployeeId,
    #[serde(flatten)]
    details: EmployeeDetails,
}

impl Employee {
    /// Pair details with their identifier.
    pub const fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self { id, details }
    }

    /// Identifier assigned at creation.
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Current field values.
    pub const fn details(&self) -> &EmployeeDetails {
        &self.details
    }

    /// Overwrite every field while keeping the identifier.
    pub fn replace_details(&mut self, details: EmployeeDetails) {
        self.details = details;
    }
}
