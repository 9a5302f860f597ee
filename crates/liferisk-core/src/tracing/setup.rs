//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels.
pub const LOG_ENV_VAR: &str = "LIFERISK_LOG";

/// Initialize human-readable logging.
///
/// Reads `LIFERISK_LOG` for per-target levels, e.g.
/// `LIFERISK_LOG=liferisk_scoring=debug,liferisk_summary=warn`.
/// Falls back to `default_level` for all `liferisk` crates when unset.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = env_filter(default_level);
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}

/// Initialize JSON-lines logging. Same filter rules as [`init_tracing`].
pub fn init_tracing_json(default_level: &str) {
    INIT.call_once(|| {
        let filter = env_filter(default_level);
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_test_writer())
            .with(EnvFilter::new(filter))
            .try_init();
    });
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "liferisk={default_level},liferisk_core={default_level},\
             liferisk_baseline={default_level},liferisk_scoring={default_level},\
             liferisk_summary={default_level},liferisk_report={default_level}"
        ))
    })
}
