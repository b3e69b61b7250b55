mod init;
mod tracing_logger;

pub use init::init_logging;
pub use tracing_logger::{TARGET, TracingLogger};
