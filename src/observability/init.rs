//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set.
#[must_use]
pub const fn default_directive(config: &Config) -> &'static str {
    if config.debug_logging {
        "debug"
    } else {
        "info"
    }
}

/// Initializes the global tracing subscriber.
///
/// Sets up a registry with:
/// 1. An `EnvFilter` from `RUST_LOG`, or [`default_directive`] when unset or invalid
/// 2. A fmt layer writing to stderr
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes effect).
///
/// # Example
///
/// ```rust
/// use userdeck::observability::init_tracing;
/// use userdeck::Config;
///
/// let config = Config { debug_logging: true, ..Config::default() };
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false));

    if subscriber.try_init().is_ok() {
        tracing::debug!(debug_logging = config.debug_logging, "tracing initialized");
    }
}
