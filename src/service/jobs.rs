//! Fail-open job search.

use strum::{Display, IntoStaticStr};
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::metrics;
use crate::store::{serialize_job, JobFilter, JobRecord, StoreHandle, MAX_RESULTS};

/// Why a search produced no records without reaching the store successfully.
#[derive(Debug, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DegradeReason {
    /// No store backend compiled in.
    StoreMissing,
    /// Store not configured.
    NotConfigured,
    /// Store client could not be created.
    InitFailed(String),
    /// The query failed.
    QueryFailed(StoreError),
}

impl DegradeReason {
    /// Metric label for this reason.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Outcome of a job search.
#[derive(Debug)]
pub enum JobSearch {
    /// Records found (possibly none), identity fields already renamed.
    Found(Vec<JobRecord>),
    /// The store could not be used; clients see an empty list.
    Degraded(DegradeReason),
}

impl JobSearch {
    /// Records to return to clients. Degraded searches yield none.
    pub fn into_items(self) -> Vec<JobRecord> {
        match self {
            Self::Found(items) => items,
            Self::Degraded(_) => Vec::new(),
        }
    }
}

/// Search the job collection, capping results at [`MAX_RESULTS`].
#[instrument(skip(handle), fields(q = ?filter.search, location = ?filter.location))]
pub async fn search_jobs(handle: &StoreHandle, filter: &JobFilter) -> JobSearch {
    let store = match handle {
        StoreHandle::Ready(store) => store,
        StoreHandle::Missing => return JobSearch::Degraded(DegradeReason::StoreMissing),
        StoreHandle::NotConfigured => return JobSearch::Degraded(DegradeReason::NotConfigured),
        StoreHandle::Failed(reason) => {
            return JobSearch::Degraded(DegradeReason::InitFailed(reason.clone()))
        }
    };

    let clauses = filter.clauses();
    let result = {
        let _timer = metrics::timer_store_query();
        store.find_jobs(&clauses, MAX_RESULTS).await
    };

    match result {
        Ok(records) => {
            let items: Vec<JobRecord> = records
                .into_iter()
                .take(MAX_RESULTS)
                .map(serialize_job)
                .collect();
            debug!(count = items.len(), "Job search completed");
            JobSearch::Found(items)
        }
        Err(e) => {
            debug!("Job query failed: {}", e);
            JobSearch::Degraded(DegradeReason::QueryFailed(e))
        }
    }
}
