mod log_sink_tracing;

pub use log_sink_tracing::*;
