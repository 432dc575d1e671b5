use crate::domain_model::LogArg;
use crate::format::FormatError;

/// Substitutes arguments into a template using fixed, non-regional rules.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, template: &str, args: &[LogArg]) -> Result<String, FormatError>;
}
