//! Document store access for job postings.
//!
//! This module handles:
//! - Job record and filter types
//! - The [`JobStore`] collaborator trait
//! - MongoDB client (behind the `mongo` feature)
//! - In-memory client for tests and local runs
//! - [`StoreHandle`], the store state resolved once at startup

pub mod handle;
pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;
pub mod types;

use async_trait::async_trait;

use crate::error::StoreError;

pub use handle::StoreHandle;
pub use memory::{MemoryJobStore, MemoryStoreConfig};
#[cfg(feature = "mongo")]
pub use mongo::MongoJobStore;
pub use types::{serialize_job, FieldMatch, JobFilter, JobRecord, JOB_COLLECTION, MAX_RESULTS};

/// A document store holding job postings.
#[async_trait]
pub trait JobStore: Send + Sync + std::fmt::Debug {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    /// Records of the job collection matching any of `clauses`, at most `limit`.
    ///
    /// Records are returned as stored, with the storage identity field intact.
    async fn find_jobs(
        &self,
        clauses: &[FieldMatch],
        limit: usize,
    ) -> Result<Vec<JobRecord>, StoreError>;

    /// Names of the collections in the database.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
