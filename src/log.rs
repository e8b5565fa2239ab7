// src/log.rs
use tracing_subscriber::EnvFilter;

/// Default directive when not running verbose: only problems reach stderr.
pub const QUIET_FILTER: &str = "warn";
pub const VERBOSE_FILTER: &str = "slam_fetch=debug,warn";

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr so stdout stays reserved for progress lines.
/// The filter is a fixed directive; no environment variable is read.
/// Calling this twice is harmless (the second install is ignored).
pub fn init(verbose: bool) {
    let directive = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
