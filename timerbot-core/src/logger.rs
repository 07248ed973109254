//! Tracing initialization: console and log file via tracing_subscriber fmt layers.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
/// One fmt layer writes to stdout, a second writes the same events to `log_file_path`
/// (ANSI off). Level comes from RUST_LOG (default info).
/// Load .env (dotenvy::dotenv()) before calling, otherwise RUST_LOG from .env is not seen.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
