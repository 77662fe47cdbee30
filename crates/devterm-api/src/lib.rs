//! devterm-api: HTTP API for DevTerm Web
//!
//! Exposes one stateless POST endpoint per developer tool, plus the
//! static interactive page. Built with axum for async HTTP handling.

pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{start_server, AppState};
