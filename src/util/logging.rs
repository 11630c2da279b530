use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `recipe_tester=debug`.
pub const LOG_ENV: &str = "RECIPE_TESTER_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs the stderr log subscriber. Later calls are no-ops.
///
/// Logs never go to stdout, which carries the report.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
