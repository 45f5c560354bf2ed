use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Fallback directive used when the configured filter does not parse.
const FALLBACK_FILTER: &str = "account_ledger=info";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `filter`. Statements are printed on stdout,
/// so log lines never interleave with them.
pub fn init_tracing(filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(filter))
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let installed = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
        if installed {
            tracing::info!("Account Ledger tracing initialized.");
        }
    });
}
