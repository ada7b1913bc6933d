//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the cardiorisk tracing/logging system.
///
/// Reads `CARDIORISK_LOG` for per-target log levels.
/// Format: `CARDIORISK_LOG=cardiorisk_inference=debug,cardiorisk_eval=info`
///
/// Falls back to `cardiorisk=info` if `CARDIORISK_LOG` is not set or is invalid.
///
/// Idempotent. Events go to stderr so `--json` output on stdout stays clean.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive()));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Default filter: info for every cardiorisk crate.
pub fn default_directive() -> &'static str {
    "cardiorisk_core=info,cardiorisk_inference=info,cardiorisk_eval=info,cardiorisk=info"
}
