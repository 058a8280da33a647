use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `pwdhash=debug`.
pub const LOG_ENV: &str = "PWDHASH_LOG";

/// Initialize logging to stderr so stdout carries only passwords.
///
/// `PWDHASH_LOG` wins when set; otherwise `warn`, or `debug` for this crate
/// when `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "warn,pwdhash=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
