//! Diagnostic reporting port.
//!
//! The config adapter reports lookup and write failures through this trait
//! instead of a process-wide logger, so callers choose where reports go.

use std::sync::Arc;

pub trait LogPort: Send + Sync {
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

impl<T: LogPort + ?Sized> LogPort for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }
}
