mod log_service_impl;

pub use log_service_impl::*;
