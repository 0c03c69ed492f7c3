//! User records.
//!
//! A [`UserDraft`] is the unvalidated body of a create or replace request.
//! Converting it into [`UserDetails`] enforces the required fields and the
//! column widths; a stored [`User`] pairs those details with the generated
//! identifier.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::field::{FieldError, optional, required};

/// Maximum widths of the user columns.
pub mod widths {
    /// `firstname` and `lastname`.
    pub const NAME: usize = 50;
    /// `gender`.
    pub const GENDER: usize = 10;
    /// `phone`.
    pub const PHONE: usize = 15;
    /// `address_line1` and `address_line2`.
    pub const ADDRESS: usize = 100;
    /// `pin`.
    pub const PIN: usize = 6;
    /// `district` and `state`.
    pub const REGION: usize = 50;
}

/// Generated user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unvalidated user fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDraft {
    #[schema(example = "Asha")]
    pub firstname: Option<String>,
    #[schema(example = "Patil")]
    pub lastname: Option<String>,
    #[schema(example = "F")]
    pub gender: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    #[schema(example = "12 MG Road")]
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    #[schema(example = "411001")]
    pub pin: Option<String>,
    #[schema(example = "Pune")]
    pub district: Option<String>,
    #[schema(example = "Maharashtra")]
    pub state: Option<String>,
}

/// Validated user fields, everything but the identifier.
///
/// ## Invariants
/// - Required fields are present, non-blank and within their column width.
/// - `address_line2` is either absent or a non-blank value within width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDetails {
    firstname: String,
    lastname: String,
    gender: String,
    phone: String,
    address_line1: String,
    address_line2: Option<String>,
    pin: String,
    district: String,
    state: String,
}

impl TryFrom<UserDraft> for UserDetails {
    type Error = FieldError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            firstname: required("firstname", draft.firstname, widths::NAME)?,
            lastname: required("lastname", draft.lastname, widths::NAME)?,
            gender: required("gender", draft.gender, widths::GENDER)?,
            phone: required("phone", draft.phone, widths::PHONE)?,
            address_line1: required("address_line1", draft.address_line1, widths::ADDRESS)?,
            address_line2: optional("address_line2", draft.address_line2, widths::ADDRESS)?,
            pin: required("pin", draft.pin, widths::PIN)?,
            district: required("district", draft.district, widths::REGION)?,
            state: required("state", draft.state, widths::REGION)?,
        })
    }
}

impl UserDetails {
    /// Given name.
    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    /// Family name.
    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// Free-form gender label, matched exactly by list filters.
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Contact number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// First address line.
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    /// Optional second address line.
    pub fn address_line2(&self) -> Option<&str> {
        self.address_line2.as_deref()
    }

    /// Postal index number.
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// District name.
    pub fn district(&self) -> &str {
        &self.district
    }

    /// State name.
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl From<UserDetails> for UserDraft {
    fn from(details: UserDetails) -> Self {
        Self {
            firstname: Some(details.firstname),
            lastname: Some(details.lastname),
            gender: Some(details.gender),
            phone: Some(details.phone),
            address_line1: Some(details.address_line1),
            address_line2: details.address_line2,
            pin: Some(details.pin),
            district: Some(details.district),
            state: Some(details.state),
        }
    }
}

/// A stored user.
///
/// Serialises flat: the identifier sits beside the detail fields.
///
/// # Examples
/// ```
/// use roster::domain::{User, UserDetails, UserDraft, UserId};
///
/// let draft = UserDraft {
///     firstname: Some("Asha".into()),
///     lastname: Some("Patil".into()),
///     gender: Some("F".into()),
///     phone: Some("9876543210".into()),
///     address_line1: Some("12 MG Road".into()),
///     address_line2: None,
///     pin: Some("411001".into()),
///     district: Some("Pune".into()),
///     state: Some("Maharashtra".into()),
/// };
/// let details = UserDetails::try_from(draft).expect("valid draft");
/// let user = User::new(UserId::new(7), details);
/// assert_eq!(user.id().get(), 7);
/// assert_eq!(user.details().district(), "Pune");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    details: UserDetails,
}

impl User {
    /// Pair details with their identifier.
    pub const fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Identifier assigned at creation.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Current field values.
    pub const fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Overwrite every field while keeping the identifier.
    pub fn replace_details(&mut self, details: UserDetails) {
        self.details = details;
    }
}

#[cfg(test)]
mod tests;
