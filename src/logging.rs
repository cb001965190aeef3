//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Variable holding the log filter, in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_VAR: &str = "PAYQR_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `PAYQR_LOG` (default `warn`).
///
/// Calling it again is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
