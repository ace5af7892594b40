//! Diagnostic tracing for the clasp binary
//!
//! Output goes to stderr only, so stdout carries nothing but the status line.
//! `CLASP_LOG` takes a full `EnvFilter` directive; without it the level is
//! `warn`, or `clasp=debug` with `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "CLASP_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "clasp=debug" } else { "warn" }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "clasp=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        tracing::debug!("logging initialised");
    }
}
