pub mod logger;
pub mod settings;

pub mod application_impl;
pub mod application_port;
pub mod domain_model;
pub mod domain_port;
pub mod format;
pub mod infra_console;
pub mod infra_memory;
pub mod infra_tracing;

mod macros;
