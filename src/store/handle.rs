//! Store state resolved once at startup and shared with request handlers.

use std::sync::Arc;

use tracing::warn;

use crate::config::Config;

use super::JobStore;

/// The job store as seen by request handlers.
#[derive(Debug, Clone)]
pub enum StoreHandle {
    /// No store backend is compiled into this binary.
    Missing,
    /// Backend available but `DATABASE_URL` / `DATABASE_NAME` are not set.
    NotConfigured,
    /// Client construction failed.
    Failed(String),
    /// Store ready for queries.
    Ready(Arc<dyn JobStore>),
}

impl StoreHandle {
    /// Wrap a ready store.
    pub fn ready(store: impl JobStore + 'static) -> Self {
        Self::Ready(Arc::new(store))
    }

    /// Resolve the store from configuration.
    ///
    /// Never fails: problems are captured in the returned variant.
    pub async fn from_config(config: &Config) -> Self {
        let Some(settings) = config.store_settings() else {
            return Self::unconfigured();
        };

        Self::connect(&settings).await
    }

    #[cfg(feature = "mongo")]
    async fn connect(settings: &crate::config::StoreSettings) -> Self {
        match super::MongoJobStore::connect(settings).await {
            Ok(store) => {
                tracing::info!(database = %settings.database, "Job store ready");
                Self::ready(store)
            }
            Err(e) => {
                warn!("Failed to create MongoDB client: {}", e);
                Self::Failed(e.to_string())
            }
        }
    }

    #[cfg(not(feature = "mongo"))]
    async fn connect(_settings: &crate::config::StoreSettings) -> Self {
        warn!("Database configured but no store backend is compiled in");
        Self::Missing
    }

    #[cfg(feature = "mongo")]
    fn unconfigured() -> Self {
        tracing::info!("DATABASE_URL or DATABASE_NAME not set; job listing will be empty");
        Self::NotConfigured
    }

    #[cfg(not(feature = "mongo"))]
    fn unconfigured() -> Self {
        Self::Missing
    }

    /// The store, when ready.
    pub fn store(&self) -> Option<&Arc<dyn JobStore>> {
        match self {
            Self::Ready(store) => Some(store),
            _ => None,
        }
    }

    /// Whether the store is ready for queries.
    pub fn is_ready(&self) -> bool {
        self.store().is_some()
    }
}
