//! Calendar SVG service.
//!
//! Serves calendar, countdown and badge widgets as SVG images on a local
//! port for embedding as `<img>` sources.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use calendar_api::{CalendarServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "calendar-api")]
#[command(about = "Local HTTP service rendering calendar widgets as SVG")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:45678", env = "CALENDAR_LISTEN_ADDR")]
    listen: SocketAddr,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Serve Prometheus metrics on this separate address
    #[arg(long, env = "CALENDAR_METRICS_ADDR")]
    metrics_listen: Option<SocketAddr>,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "CALENDAR_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();

    if let Some(addr) = args.metrics_listen {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .context("Failed to install Prometheus exporter")?;
        info!(address = %addr, "Prometheus metrics exporter listening");
    }

    let mut server = CalendarServer::new(ServerConfig::new(args.listen));
    server.start().await?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received");

    server.stop().await?;
    Ok(())
}
