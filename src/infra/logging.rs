//! Diagnostics logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TOOL_FINDER_LOG=debug`.
pub const LOG_ENV: &str = "TOOL_FINDER_LOG";

/// Installs a stderr `tracing` subscriber. Results go to stdout, so logs never
/// mix with them. Calling this twice is harmless.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
