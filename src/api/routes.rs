//! HTTP API route definitions.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::utils::shutdown_signal;

use super::handlers::{hello, list_jobs, metrics_text, root, test_database, AppState};

/// CORS layer allowing every origin, method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so the request values are
/// mirrored back instead.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greetings
        .route("/", get(root))
        .route("/api/hello", get(hello))
        // Jobs
        .route("/jobs", get(list_jobs))
        // Diagnostics
        .route("/test", get(test_database))
        .route("/metrics", get(metrics_text))
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `listener` until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
