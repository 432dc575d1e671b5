/// Emits a debug record through a [`LogService`](crate::application_port::LogService).
///
/// Arguments are converted with `LogArg::from`. They are not evaluated at
/// all when the service is not debuggable.
///
/// ```
/// use debugger::application_impl::LogServiceImpl;
/// use debugger::domain_model::{BuildMode, Tag};
/// use debugger::infra_memory::MemoryLogSink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryLogSink::new());
/// let service = LogServiceImpl::new(sink.clone(), BuildMode::Debug);
/// debugger::log_debug!(service, &Tag::new("Cart"), "%d items", 3).unwrap();
/// assert_eq!(sink.records()[0].message, "3 items");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($service:expr, $caller:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::application_port::LogService as _;
        let service = &$service;
        if service.is_debuggable() {
            service.debug(
                $caller,
                ::core::option::Option::Some($template),
                &[$($crate::domain_model::LogArg::from($arg)),*],
            )
        } else {
            ::core::result::Result::<(), $crate::application_port::LogError>::Ok(())
        }
    }};
}

/// Emits an info record through a [`LogService`](crate::application_port::LogService).
#[macro_export]
macro_rules! log_info {
    ($service:expr, $caller:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::application_port::LogService as _;
        $service.info(
            $caller,
            ::core::option::Option::Some($template),
            &[$($crate::domain_model::LogArg::from($arg)),*],
        )
    }};
}
