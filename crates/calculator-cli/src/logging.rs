//! Log subscriber setup
//!
//! Events go to stderr so stdout stays clean for results. `RUST_LOG` wins
//! over the `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .without_time()
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(?verbosity, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
