//! Diagnostics setup. Events go to stderr so stdout only carries listings.

use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `fmt` subscriber.
///
/// Honours `RUST_LOG` when set, otherwise only warnings are shown.
pub fn init_tracing() -> Result<(), DemoError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| DemoError::Telemetry(err.to_string()))
}
