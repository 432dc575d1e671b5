mod build_mode;
mod log_arg;
mod severity;
mod tag;

pub use build_mode::*;
pub use log_arg::*;
pub use severity::*;
pub use tag::*;
