//! Stderr logging through `tracing-subscriber`.
//!
//! `MCB_LOG` takes any `EnvFilter` directive (e.g. `mcb_core=trace`) and
//! overrides the level chosen by `--quiet` / `--verbose`.
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "MCB_LOG";

/// The directive used when `MCB_LOG` is not set.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("keeping the already installed subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_default_level() {
        assert_eq!(default_directive(false, false), "warn");
        assert_eq!(default_directive(true, false), "error");
        assert_eq!(default_directive(false, true), "debug");
    }
}
