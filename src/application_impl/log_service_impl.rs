use crate::application_port::{LogError, LogService};
use crate::domain_model::{BuildMode, LogArg, Nameable, Severity};
use crate::domain_port::{LogSink, MessageFormatter};
use crate::format::PrintfFormatter;
use std::sync::Arc;

pub struct LogServiceImpl {
    sink: Arc<dyn LogSink>,
    formatter: Arc<dyn MessageFormatter>,
    build: BuildMode,
}

impl LogServiceImpl {
    pub fn new(sink: Arc<dyn LogSink>, build: BuildMode) -> Self {
        Self {
            sink,
            formatter: Arc::new(PrintfFormatter),
            build,
        }
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn MessageFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Like [`LogService::debug`], but `args` only runs when the record is
    /// actually emitted.
    pub fn debug_lazy<F>(
        &self,
        caller: &dyn Nameable,
        template: &str,
        args: F,
    ) -> Result<(), LogError>
    where
        F: FnOnce() -> Vec<LogArg>,
    {
        if !self.is_debuggable() {
            return Ok(());
        }
        self.emit(Severity::Debug, caller, Some(template), &args())
    }

    fn message(&self, template: Option<&str>, args: &[LogArg]) -> Result<String, LogError> {
        let template = template.ok_or(LogError::NullTemplate)?;
        if args.is_empty() {
            return Ok(template.to_owned());
        }
        Ok(self.formatter.format(template, args)?)
    }

    fn emit(
        &self,
        severity: Severity,
        caller: &dyn Nameable,
        template: Option<&str>,
        args: &[LogArg],
    ) -> Result<(), LogError> {
        let tag = caller.tag();
        let message = self.message(template, args)?;
        self.sink.write(severity, &tag, &message);
        Ok(())
    }
}

impl LogService for LogServiceImpl {
    fn is_debuggable(&self) -> bool {
        self.build.is_debug()
    }

    fn debug(
        &self,
        caller: &dyn Nameable,
        template: Option<&str>,
        args: &[LogArg],
    ) -> Result<(), LogError> {
        if !self.is_debuggable() {
            return Ok(());
        }
        self.emit(Severity::Debug, caller, template, args)
    }

    fn info(
        &self,
        caller: &dyn Nameable,
        template: Option<&str>,
        args: &[LogArg],
    ) -> Result<(), LogError> {
        self.emit(Severity::Info, caller, template, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::{Tag, TypeOf};
    use crate::format::FormatError;
    use crate::infra_memory::MemoryLogSink;

    struct Widget;

    impl Nameable for Widget {}

    struct Shouting;

    impl MessageFormatter for Shouting {
        fn format(&self, template: &str, _args: &[LogArg]) -> Result<String, FormatError> {
            Ok(template.to_uppercase())
        }
    }

    fn setup(build: BuildMode) -> (Arc<MemoryLogSink>, LogServiceImpl) {
        let sink = Arc::new(MemoryLogSink::new());
        let service = LogServiceImpl::new(sink.clone(), build);
        (sink, service)
    }

    #[test]
    fn test_debug_is_dropped_in_release() {
        let (sink, service) = setup(BuildMode::Release);
        service.debug(&Widget, Some("literal"), &[]).unwrap();
        service.debug(&Widget, None, &[]).unwrap();
        service.debug(&Widget, Some("%d"), &["x".into()]).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_debug_writes_once_in_debug() {
        let (sink, service) = setup(BuildMode::Debug);
        service.debug(&Widget, Some("literal"), &[]).unwrap();
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Debug);
        assert_eq!(records[0].tag.as_str(), "Widget");
        assert_eq!(records[0].message, "literal");
    }

    #[test]
    fn test_info_ignores_build_mode() {
        for build in [BuildMode::Debug, BuildMode::Release] {
            let (sink, service) = setup(build);
            service
                .info(&TypeOf::<Widget>::new(), Some("%d items"), &[LogArg::Int(3)])
                .unwrap();
            let records = sink.records();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].severity, Severity::Info);
            assert_eq!(records[0].tag.as_str(), "Widget");
            assert_eq!(records[0].message, "3 items");
        }
    }

    #[test]
    fn test_no_args_means_literal() {
        let (sink, service) = setup(BuildMode::Debug);
        service.info(&Widget, Some("100% done"), &[]).unwrap();
        assert_eq!(sink.records()[0].message, "100% done");
    }

    #[test]
    fn test_errors_precede_the_write() {
        let (sink, service) = setup(BuildMode::Debug);
        assert!(matches!(
            service.info(&Widget, None, &[]),
            Err(LogError::NullTemplate)
        ));
        assert!(matches!(
            service.debug(&Widget, Some("%d items"), &["x".into()]),
            Err(LogError::Format(FormatError::IllegalConversion { .. }))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_debug_lazy_skips_the_supplier_in_release() {
        let (sink, service) = setup(BuildMode::Release);
        service
            .debug_lazy(&Widget, "%s", || panic!("supplier must not run"))
            .unwrap();
        assert!(sink.is_empty());

        let (sink, service) = setup(BuildMode::Debug);
        service
            .debug_lazy(&Tag::new("Lazy"), "%s", || vec!["ran".into()])
            .unwrap();
        assert_eq!(sink.records()[0].message, "ran");
    }

    #[test]
    fn test_custom_formatter() {
        let (sink, service) = setup(BuildMode::Debug);
        let service = service.with_formatter(Arc::new(Shouting));
        service.info(&Widget, Some("quiet %s"), &["x".into()]).unwrap();
        service.info(&Widget, Some("untouched"), &[]).unwrap();
        let messages: Vec<_> = sink.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, ["QUIET %S", "untouched"]);
    }
}
