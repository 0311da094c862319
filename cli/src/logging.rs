//! Subscriber setup for the binary. Library crates log through `log`;
//! the `fmt` subscriber picks those records up via its `tracing-log`
//! bridge.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads `WARPMAZE_LOG` for filter directives, e.g.
/// `WARPMAZE_LOG=warpmaze_paths=debug,warpmaze_lab=info`. `verbose` raises
/// the fallback to debug when the variable is unset. Safe to call more than
/// once.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "warpmaze_paths=debug,warpmaze_lab=debug,warpmaze=debug"
        } else {
            "warpmaze_lab=info,warpmaze=info"
        };
        let filter =
            EnvFilter::try_from_env("WARPMAZE_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
