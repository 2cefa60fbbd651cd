//! Diagnostic logging setup.
//!
//! Engine diagnostics are `tracing` events written to standard error, so they
//! never mix with CSV or JSON on standard output.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `TAGREC_LOG=tagrec_engine=debug`.
pub const LOG_ENV: &str = "TAGREC_LOG";

/// Returns the default filter directive for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber.
///
/// `TAGREC_LOG` takes precedence over the verbosity flag. Calling this more
/// than once leaves the first subscriber in place.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed, e.g. by a test harness.
    drop(
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .try_init(),
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_raises_default_level() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }
}
