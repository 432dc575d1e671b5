use crate::domain_model::{Severity, Tag};

/// Destination of finished log records.
///
/// Implementations must be safe to call from several threads at once;
/// the service adds no synchronization of its own.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, tag: &Tag, message: &str);
}
