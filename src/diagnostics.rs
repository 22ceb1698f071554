//! Logging setup and user-facing message formatting.
//!
//! Logs go to stderr so stdout only carries query results.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn error_message(msg: impl Into<String>) -> String {
    format!("error: {}", msg.into())
}

pub fn warn(msg: impl AsRef<str>) {
    tracing::warn!("{}", msg.as_ref());
}
