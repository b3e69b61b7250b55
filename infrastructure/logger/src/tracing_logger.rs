use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every catalog line is emitted under, for `RUST_LOG=catalog=debug`.
pub const TARGET: &str = "catalog";

/// `Logger` adapter that forwards to the global `tracing` dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{message}");
    }
}
