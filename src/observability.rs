//! Tracing initialization.
//!
//! Sets up the `tracing` subscriber for hosts that want the core's structured
//! logs. Initialization is optional; the core's spans and events are inert
//! without a subscriber.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a stderr fmt layer.
///
/// The filter level is taken from `config.trace_level`, defaulting to
/// `"info"`. Idempotent: safe to call multiple times, only the first call
/// takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
