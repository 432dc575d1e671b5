use super::Parser;
use crate::domain_model::LogArg;

/// Emit one log record through the configured sink.
#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// Tag to log under.
    #[arg(long, default_value = "debugger")]
    pub tag: String,

    /// Log at debug severity (dropped in release builds).
    #[arg(long)]
    pub debug: bool,

    /// Template followed by its arguments.
    #[arg(required = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Reads a command-line argument as the most specific loggable value.
pub fn parse_arg(raw: &str) -> LogArg {
    if let Ok(value) = raw.parse::<i64>() {
        return LogArg::Int(value);
    }
    if let Ok(value) = raw.parse::<f64>() {
        return LogArg::Float(value);
    }
    match raw {
        "true" => LogArg::Bool(true),
        "false" => LogArg::Bool(false),
        _ => LogArg::Str(raw.to_string()),
    }
}
