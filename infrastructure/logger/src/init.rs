use std::error::Error;

use tracing_subscriber::EnvFilter;

use crate::tracing_logger::TARGET;

/// Installs the process-wide `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`)
/// is used. Fails instead of panicking when a subscriber is already
/// installed, so callers may invoke it more than once.
pub fn init_logging(default_directive: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()?;

    tracing::debug!(target: TARGET, "logging initialized");
    Ok(())
}
