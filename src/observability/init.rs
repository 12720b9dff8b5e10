//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber for host processes embedding the engine.
//! Spans and events throughout the crate (filter recomputation, event
//! handling, transition scheduling) flow through this pipeline.

use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initializes a formatted tracing subscriber writing to stderr.
///
/// The level comes from `config.trace_level` (default `"info"`); the standard
/// `RUST_LOG`-style directive syntax is accepted. Initialization is
/// idempotent and silently yields to an already-installed subscriber, so
/// library consumers that bring their own pipeline are never disturbed.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
