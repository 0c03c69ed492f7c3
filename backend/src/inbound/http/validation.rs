//! Conversion of request validation failures into `invalid_request` errors.
//!
//! Every validation error carries `details.field` naming the offending input
//! and `details.code` naming the rule it broke.

use pagination::PageRequestError;
use serde_json::json;

use crate::domain::{Error, FieldError};

/// Error for a body field that failed validation.
pub(crate) fn field_error(err: &FieldError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

/// Error for a `limit` below 1 or a negative `offset`.
pub(crate) fn page_error(err: &PageRequestError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.parameter(),
        "code": "below_minimum",
    }))
}
