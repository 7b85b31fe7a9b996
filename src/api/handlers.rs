//! HTTP API handlers.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::metrics;
use crate::service::{self, EnvPresence, JobSearch};
use crate::store::{JobFilter, JobRecord, StoreHandle};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Job store resolved at startup.
    pub store: StoreHandle,
    /// Presence of the database environment variables.
    pub env: EnvPresence,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state.
    pub fn new(store: StoreHandle, env: EnvPresence) -> Self {
        Self {
            store,
            env,
            metrics: None,
        }
    }

    /// Create app state from configuration and a resolved store.
    pub fn from_config(config: &Config, store: StoreHandle) -> Self {
        let env = EnvPresence {
            database_url: config.has_database_url(),
            database_name: config.has_database_name(),
        };
        Self::new(store, env)
    }

    /// Attach a Prometheus handle for the metrics endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Greeting response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: &'static str,
}

/// Job listing response.
#[derive(Debug, Serialize)]
pub struct JobsResponse {
    /// Matching jobs, at most 100.
    pub items: Vec<JobRecord>,
}

/// Root greeting.
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Hello from FastAPI Backend!",
    })
}

/// API greeting.
pub async fn hello() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Job listing handler - always returns 200, with an empty list when the
/// store is unusable.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    metrics::inc_jobs_requests();
    let filter = JobFilter::from_pairs(params);

    let items = match service::search_jobs(&state.store, &filter).await {
        JobSearch::Found(items) => items,
        JobSearch::Degraded(reason) => {
            warn!(reason = %reason, detail = ?reason, "Job listing degraded to empty result");
            metrics::inc_jobs_degraded(reason.label());
            Vec::new()
        }
    };
    metrics::add_jobs_returned(items.len());

    Json(JobsResponse { items })
}

/// Diagnostics handler - always returns 200.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_diagnostics_requests();
    Json(service::diagnose(&state.store, state.env).await)
}

/// Prometheus metrics in text format.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
