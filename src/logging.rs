use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
const DEFAULT_LEVEL: &str = "info";

/// Initialise logging to stdout. The level can be overridden via the
/// `RUST_LOG` environment variable.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();
}
