//! Job board HTTP backend.
//!
//! Serves greetings, a job listing backed by an optional MongoDB database,
//! and a diagnostics report on database connectivity.
//!
//! # Fail-open
//!
//! The job listing never fails because of the database. When the store is
//! missing, unconfigured or erroring, clients receive an empty list:
//!
//! ```text
//! GET /jobs?q=engineer   (no DATABASE_URL)
//! 200 {"items": []}
//! ```
//!
//! The reason is logged and counted in `jobs_degraded_total{reason}`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Job records, filters and store clients
//! - [`service`]: Job search and diagnostics
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod service;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
