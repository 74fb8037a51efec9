//! Tracing setup: subscriber installation, span names, and structured events.

pub mod events;

use tracing_subscriber::EnvFilter;

use pitstop_core::config::ObservabilityConfig;
use pitstop_core::errors::{PitstopError, PitstopResult};

/// Span names used across the engine.
pub mod names {
    pub const PROCESS: &str = "pitstop.process";
    pub const RESPOND: &str = "pitstop.respond";
    pub const END_SESSION: &str = "pitstop.end_session";
}

/// Install the global subscriber.
///
/// `config.log_level` must be a valid filter even when `RUST_LOG` is set
/// and overrides it. Fails if a global subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> PitstopResult<()> {
    let configured = EnvFilter::try_new(&config.log_level).map_err(|e| PitstopError::Config {
        reason: format!("invalid log filter {:?}: {e}", config.log_level),
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| PitstopError::Config {
        reason: format!("tracing subscriber already installed: {e}"),
    })
}

/// Install a subscriber with an explicit filter string (for tests or
/// embedding). Silently keeps an existing subscriber.
pub fn init_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}
