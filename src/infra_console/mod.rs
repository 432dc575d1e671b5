mod log_sink_console;

pub use log_sink_console::*;
