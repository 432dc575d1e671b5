use crate::domain_model::{LogArg, Nameable};
use crate::format::FormatError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("log template is absent")]
    NullTemplate,
    #[error("malformed log call: {0}")]
    Format(#[from] FormatError),
}

/// Tagged, formatted logging at debug and info severity.
///
/// An empty `args` slice means the template is literal text and is logged
/// as is, `%` signs included.
pub trait LogService: Send + Sync {
    /// Whether debug-level records are emitted at all.
    fn is_debuggable(&self) -> bool;

    /// Emits a debug record; a no-op unless the service is debuggable.
    fn debug(
        &self,
        caller: &dyn Nameable,
        template: Option<&str>,
        args: &[LogArg],
    ) -> Result<(), LogError>;

    /// Emits an info record regardless of build mode.
    fn info(
        &self,
        caller: &dyn Nameable,
        template: Option<&str>,
        args: &[LogArg],
    ) -> Result<(), LogError>;
}
