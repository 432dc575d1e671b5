mod log_sink;
mod message_formatter;

pub use log_sink::*;
pub use message_formatter::*;
