//! Logging setup for the CLI
//!
//! Logs go to stderr so they never mix with the rendered table.
//!
//! ## Level priority
//!
//! 1. `--verbose` flag (`sqltab=debug`)
//! 2. `RUST_LOG` environment variable
//! 3. Default: `sqltab=warn`

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber; later calls are no-ops
pub fn init_logging(verbose: bool) {
    LOGGING_INITIALIZED.get_or_init(|| {
        let filter = if verbose {
            EnvFilter::new("sqltab=debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sqltab=warn"))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
        assert!(LOGGING_INITIALIZED.get().is_some());
    }
}
