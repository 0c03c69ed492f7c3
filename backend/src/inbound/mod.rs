//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! HTTP handlers and the bundled web client live under [`http`].

pub mod http;
