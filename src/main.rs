//! Job board backend entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use job_board::api::{serve, AppState};
use job_board::config::Config;
use job_board::metrics;
use job_board::store::StoreHandle;

/// Job board HTTP backend.
#[derive(Parser, Debug)]
#[command(name = "job-board")]
#[command(about = "HTTP backend serving job listings from an optional MongoDB database")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the resolved configuration and exit.
    #[arg(long)]
    check_config: bool,
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("job_board=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    init_logging(&config, args.verbose);

    if args.check_config {
        cmd_check_config(&config);
        return Ok(());
    }

    cmd_serve(config).await
}

/// Print the resolved configuration, reporting secrets by presence only.
fn cmd_check_config(config: &Config) {
    let presence = |set: bool| if set { "set" } else { "not set" };

    println!("======================================================================");
    println!("JOB BOARD - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Port: {}", config.port);
    println!("  DATABASE_URL: {}", presence(config.has_database_url()));
    println!("  DATABASE_NAME: {}", presence(config.has_database_name()));
    println!("  Log Level: {}", config.rust_log);
    println!("  JSON Logs: {}", config.log_json);
    println!(
        "  Store Backend: {}",
        if cfg!(feature = "mongo") { "MongoDB" } else { "none" }
    );
    println!("======================================================================");
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    let store = StoreHandle::from_config(&config).await;
    let mut app_state = AppState::from_config(&config, store);

    match metrics::init_metrics() {
        Ok(handle) => app_state = app_state.with_metrics(handle),
        Err(e) => warn!("Metrics disabled: {}", e),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("HTTP server listening on {}", addr);

    serve(listener, app_state).await?;

    info!("Server stopped");
    Ok(())
}
