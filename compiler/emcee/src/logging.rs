//! Tracing subscriber setup for the `emcee` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the driver's tracing filter.
pub const LOG_ENV: &str = "EMCEE_LOG";

/// Install a stderr `fmt` subscriber when `EMCEE_LOG` or `RUST_LOG` is set.
///
/// `EMCEE_LOG` wins when both are present. Safe to call more than once;
/// only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
