//! Diesel and pool error translation shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Whether the failure is a unique-constraint violation.
pub(crate) fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

/// Translate a pool failure with the repository's connection constructor.
pub(crate) fn map_pool_error<E>(error: &PoolError, connection: impl FnOnce(String) -> E) -> E {
    debug!(message = error.message(), "connection checkout failed");
    connection(error.message().to_owned())
}

/// Translate a Diesel failure into a connection or query error.
///
/// Database messages are logged at debug level and kept out of the returned
/// error, which may reach clients.
pub(crate) fn map_diesel_error<E>(
    error: &DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection("database connection error"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DeserializationError(_) => query("unreadable row"),
        _ => query("database error"),
    }
}

/// `LIKE` pattern matching `term` anywhere, with wildcards in `term` escaped.
///
/// Pair with `.escape('\\')` on the predicate.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len().saturating_add(2));
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
