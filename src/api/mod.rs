//! HTTP API module for greeting, job listing, diagnostics and metrics endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, serve};
