//! Shared logging setup for the scenario tests.
//!
//! The library logs through the `log` facade; the subscriber installed here
//! picks those records up alongside the tracing events the tests emit.
//!
//! - `RUST_LOG=colorway::parse=trace` shows parse dispatch decisions
//! - `TEST_LOG_JSON=1` switches to JSON lines for CI

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the test subscriber once per binary. Output is captured unless
/// the test fails or `--nocapture` is passed.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("colorway=debug,test=info"));
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var_os("TEST_LOG_JSON").is_some() {
            registry
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Enter a span naming the current phase of a scenario.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    tracing::info_span!("test_phase", phase = name).entered()
}

pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(test_name, description, "test context");
}
