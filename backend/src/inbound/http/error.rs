//! HTTP mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while giving every failure a status code,
//! a `trace-id` header and a JSON body. Internal errors are logged in full and
//! returned with a generic message.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }
    error!(message = err.message(), trace_id = ?err.trace_id(), "internal error");
    let redacted = Error::internal("Internal server error");
    match err.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

/// `JsonConfig` error handler: malformed bodies become `invalid_request`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "payload_too_large"
        }
        _ => "invalid_json",
    };
    Error::invalid_request(format!("invalid request body: {err}"))
        .with_details(json!({ "code": code }))
        .into()
}

/// `QueryConfig` error handler: unparsable query strings become
/// `invalid_request`.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}"))
        .with_details(json!({ "code": "invalid_query" }))
        .into()
}

/// `PathConfig` error handler: non-integer identifiers become
/// `invalid_request`.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path parameter: {err}"))
        .with_details(json!({ "field": "id", "code": "invalid_id" }))
        .into()
}
