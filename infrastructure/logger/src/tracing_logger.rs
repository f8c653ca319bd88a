use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target, so
/// `RUST_LOG=recipes=debug` selects everything the core emits.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipes", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipes", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipes", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipes", "{}", message);
    }
}
