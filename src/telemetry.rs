//! Logging setup for harnesses embedding the monitor.

use tracing_subscriber::EnvFilter;

/// Install a human-readable stderr subscriber at the given verbosity.
///
/// Safe to call more than once; later calls are no-ops if a global
/// subscriber is already installed. Respects `RUST_LOG` when set.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(0);
        init_logging(2);
    }
}
