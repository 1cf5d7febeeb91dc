use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "LNKSCAN_LOG";

const DEFAULT_FILTER: &str = "lnkscan=warn";

static INIT: Once = Once::new();

/// Install the stderr subscriber. Idempotent.
///
/// Reads [`LOG_ENV`], e.g. `LNKSCAN_LOG=lnkscan=debug`, and falls back to
/// `lnkscan=warn` when unset or invalid, which keeps a normal run silent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true),
            )
            .with(filter)
            .init();
    });
}
