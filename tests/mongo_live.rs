//! Live tests against a real MongoDB server.
//!
//! These tests require DATABASE_URL and DATABASE_NAME environment variables.
//! Run with: cargo test --test mongo_live -- --ignored
#![cfg(feature = "mongo")]

use job_board::config::Config;
use job_board::service::{diagnose, search_jobs, EnvPresence, JobSearch};
use job_board::store::{JobFilter, StoreHandle};

/// Get a test config from environment.
fn test_config() -> Option<Config> {
    dotenvy::dotenv().ok();
    let config = Config::load().ok()?;
    config.store_settings().map(|_| config)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL and DATABASE_NAME"]
async fn test_search_against_live_database() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: DATABASE_URL or DATABASE_NAME not set");
            return;
        }
    };

    let handle = StoreHandle::from_config(&config).await;
    assert!(handle.is_ready(), "store not ready: {:?}", handle);

    let filter = JobFilter::new(Some("engineer".to_string()), None);
    match search_jobs(&handle, &filter).await {
        JobSearch::Found(items) => {
            assert!(items.len() <= 100);
            for item in &items {
                assert!(!item.contains_key("_id"));
            }
            println!("Found {} jobs", items.len());
        }
        JobSearch::Degraded(reason) => panic!("search degraded: {:?}", reason),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL and DATABASE_NAME"]
async fn test_diagnostics_against_live_database() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: DATABASE_URL or DATABASE_NAME not set");
            return;
        }
    };

    let handle = StoreHandle::from_config(&config).await;
    let env = EnvPresence {
        database_url: true,
        database_name: true,
    };
    let report = diagnose(&handle, env).await;

    assert_eq!(report.connection_status, "Connected");
    assert_eq!(report.database, "✅ Connected & Working", "{:?}", report);
    assert!(report.collections.len() <= 10);
    println!("Collections: {:?}", report.collections);
}
