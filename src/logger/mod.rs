//! Process-wide `tracing` subscriber setup.
//! See `bin/logger_demo.rs` for a binary exercising it together with the log service.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
