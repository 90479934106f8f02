//! `LogPort` backed by `tracing` events.
//!
//! Installing a subscriber is left to the binary.

use crate::ports::log_port::LogPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogAdapter;

impl LogPort for TracingLogAdapter {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
