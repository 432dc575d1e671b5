/// A template and its arguments that cannot be formatted together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown format conversion '{0}'")]
    UnknownConversion(String),
    #[error("missing argument for format specifier '{0}'")]
    MissingArgument(String),
    #[error("format specifier '{specifier}' cannot format a {argument} argument")]
    IllegalConversion {
        specifier: String,
        argument: &'static str,
    },
    #[error("flags '{flags}' do not apply to conversion '{conversion}'")]
    FlagsMismatch { flags: String, conversion: char },
    #[error("illegal flag combination '{0}'")]
    IllegalFlags(String),
    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
    #[error("format specifier '{0}' requires a width")]
    MissingWidth(String),
    #[error("precision {0} is not allowed for this conversion")]
    IllegalPrecision(usize),
    #[error("width {0} is not allowed for this conversion")]
    IllegalWidth(usize),
    #[error("illegal argument index {0}")]
    IllegalArgumentIndex(usize),
    #[error("{0} is not a valid code point")]
    IllegalCodePoint(String),
    #[error("number out of range in format specifier '{0}'")]
    NumberOverflow(String),
}
