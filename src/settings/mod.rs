//! Settings file and command line of the `debugger` binary.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
