// src/log.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "device_scrape=info";
const VERBOSE_FILTER: &str = "device_scrape=debug";

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call twice; the second call is ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
