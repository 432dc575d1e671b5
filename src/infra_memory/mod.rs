mod log_sink_memory;

pub use log_sink_memory::*;
