//! Printf-style formatting of log templates with fixed English conventions:
//! `.` as the decimal point, `,` between thousands and half-up rounding.
//!
//! Specifiers follow `%[index$][flags][width][.precision]conversion` with
//! the conversions `b s c d o x e f g n %` (and their upper-case forms).

mod decimal;
mod error;
mod render;
mod spec;

pub use error::*;

use crate::domain_model::LogArg;
use crate::domain_port::MessageFormatter;

/// Formats `template` with `args`. Surplus arguments are ignored.
pub fn format_template(template: &str, args: &[LogArg]) -> Result<String, FormatError> {
    let segments = spec::parse(template)?;
    render::render(&segments, args)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfFormatter;

impl MessageFormatter for PrintfFormatter {
    fn format(&self, template: &str, args: &[LogArg]) -> Result<String, FormatError> {
        format_template(template, args)
    }
}
