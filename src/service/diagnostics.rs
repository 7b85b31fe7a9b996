//! Database connectivity report for the debug panel.

use serde::Serialize;
use tracing::{debug, warn};

use crate::store::StoreHandle;
use crate::utils::truncate_chars;

/// Number of collection names included in the report.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Characters of an error description kept in a status string.
pub const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const DB_CONNECTED: &str = "Connected";
const DB_NOT_CONNECTED: &str = "Not Connected";
const DB_WORKING: &str = "✅ Connected & Working";
const DB_MODULE_MISSING: &str = "❌ Database module not found (run enable-database first)";
const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
const ENV_SET: &str = "✅ Set";
const ENV_NOT_SET: &str = "❌ Not Set";

/// Which database environment variables are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    /// `DATABASE_URL` is set.
    pub database_url: bool,
    /// `DATABASE_NAME` is set.
    pub database_name: bool,
}

/// Diagnostics response body. Every field is always present.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticsReport {
    /// Backend liveness.
    pub backend: String,
    /// Database status line.
    pub database: String,
    /// Presence of `DATABASE_URL`.
    pub database_url: String,
    /// Presence of `DATABASE_NAME`.
    pub database_name: String,
    /// "Connected" or "Not Connected".
    pub connection_status: String,
    /// Up to ten collection names.
    pub collections: Vec<String>,
    /// Name of the connected database, when the store is ready.
    pub connected_database: Option<String>,
}

fn presence(set: bool) -> String {
    let text = if set { ENV_SET } else { ENV_NOT_SET };
    text.to_string()
}

/// Build the report. Never fails; each check folds its error into text.
pub async fn diagnose(handle: &StoreHandle, env: EnvPresence) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: BACKEND_RUNNING.to_string(),
        database: DB_MODULE_MISSING.to_string(),
        database_url: presence(env.database_url),
        database_name: presence(env.database_name),
        connection_status: DB_NOT_CONNECTED.to_string(),
        collections: Vec::new(),
        connected_database: None,
    };

    match handle {
        StoreHandle::Missing => {}
        StoreHandle::NotConfigured => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
        StoreHandle::Failed(reason) => {
            report.database = format!("❌ Error: {}", truncate_chars(reason, MAX_ERROR_CHARS));
        }
        StoreHandle::Ready(store) => {
            report.connection_status = DB_CONNECTED.to_string();
            report.connected_database = Some(store.name().to_string());

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_REPORTED_COLLECTIONS);
                    debug!(collections = names.len(), "Collection listing succeeded");
                    report.collections = names;
                    report.database = DB_WORKING.to_string();
                }
                Err(e) => {
                    warn!("Collection listing failed: {}", e);
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
                    );
                }
            }
        }
    }

    report
}
