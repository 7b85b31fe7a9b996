//! Request-level operations over the job store.

pub mod diagnostics;
pub mod jobs;

pub use diagnostics::{diagnose, DiagnosticsReport, EnvPresence};
pub use jobs::{search_jobs, DegradeReason, JobSearch};
