//! Logging setup for the `changeset` binary

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
