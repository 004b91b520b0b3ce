//! Tracing subscriber setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `genlist_lib=trace`).
pub const LOG_ENV: &str = "GENLIST_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `GENLIST_LOG`.
///
/// Safe to call more than once; later calls are no-ops. Stdout is left alone
/// so status lines printed by the CLI are not interleaved with log output.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
