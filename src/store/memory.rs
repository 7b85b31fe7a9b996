//! In-memory job store for tests.
//!
//! Mirrors the query semantics of the MongoDB store without a server, and can
//! be configured to fail or stall like a misbehaving database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::StoreError;

use super::types::{FieldMatch, JobRecord, JOB_COLLECTION};
use super::JobStore;

/// Configuration for in-memory store behavior.
#[derive(Debug, Clone)]
pub struct MemoryStoreConfig {
    /// Database name to report.
    pub name: String,
    /// Whether to fail job queries.
    pub fail_queries: bool,
    /// Whether to fail collection listing.
    pub fail_listing: bool,
    /// Error description used for simulated failures.
    pub failure_message: String,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            name: "memory".to_string(),
            fail_queries: false,
            fail_listing: false,
            failure_message: "simulated store failure".to_string(),
            latency_ms: 0,
        }
    }
}

/// In-memory job store.
#[derive(Debug, Clone)]
pub struct MemoryJobStore {
    config: MemoryStoreConfig,
    jobs: Arc<Mutex<Vec<JobRecord>>>,
    extra_collections: Arc<Mutex<Vec<String>>>,
}

impl MemoryJobStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(MemoryStoreConfig::default())
    }

    /// Create an empty store with custom configuration.
    pub fn with_config(config: MemoryStoreConfig) -> Self {
        Self {
            config,
            jobs: Arc::new(Mutex::new(Vec::new())),
            extra_collections: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a job record.
    pub fn insert(&self, record: JobRecord) {
        self.jobs.lock().unwrap().push(record);
    }

    /// Add a job from a JSON object. Non-object values are ignored.
    pub fn insert_json(&self, value: Value) {
        if let Value::Object(record) = value {
            self.insert(record);
        }
    }

    /// Register an additional (empty) collection name.
    pub fn add_collection(&self, name: impl Into<String>) {
        self.extra_collections.lock().unwrap().push(name.into());
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    /// Whether the store holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }

    fn failure(&self) -> StoreError {
        StoreError::Backend(self.config.failure_message.clone())
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

struct CompiledMatch {
    field: &'static str,
    regex: Regex,
}

impl CompiledMatch {
    fn compile(clause: &FieldMatch) -> Result<Self, StoreError> {
        let regex = RegexBuilder::new(&clause.pattern())
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            field: clause.field,
            regex,
        })
    }

    /// String fields match directly; arrays match if any string element does.
    fn matches(&self, record: &JobRecord) -> bool {
        match record.get(self.field) {
            Some(Value::String(s)) => self.regex.is_match(s),
            Some(Value::Array(items)) => items
                .iter()
                .any(|item| item.as_str().is_some_and(|s| self.regex.is_match(s))),
            _ => false,
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn find_jobs(
        &self,
        clauses: &[FieldMatch],
        limit: usize,
    ) -> Result<Vec<JobRecord>, StoreError> {
        self.simulate_latency().await;

        if self.config.fail_queries {
            return Err(self.failure());
        }

        let compiled = clauses
            .iter()
            .map(CompiledMatch::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let jobs = self.jobs.lock().unwrap();
        let found = jobs
            .iter()
            .filter(|record| compiled.is_empty() || compiled.iter().any(|m| m.matches(record)))
            .take(limit)
            .cloned()
            .collect();

        Ok(found)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.simulate_latency().await;

        if self.config.fail_listing {
            return Err(self.failure());
        }

        let mut names = vec![JOB_COLLECTION.to_string()];
        names.extend(self.extra_collections.lock().unwrap().iter().cloned());
        Ok(names)
    }
}
