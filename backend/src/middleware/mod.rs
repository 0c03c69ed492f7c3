//! Request middleware.
//!
//! [`Trace`] tags every request with a correlation id used in logs, error
//! bodies and the `trace-id` response header.

pub mod trace;

pub use trace::Trace;
