use debugger::application_impl::LogServiceImpl;
use debugger::application_port::{LogError, LogService};
use debugger::domain_model::{BuildMode, LogArg, Nameable, Severity, Tag, TypeOf};
use debugger::format::FormatError;
use debugger::infra_memory::MemoryLogSink;
use debugger::{log_debug, log_info};
use std::cell::Cell;
use std::sync::Arc;
use std::thread;

mod widgets {
    pub struct Widget;
    pub struct Gadget {
        pub id: u32,
    }
}

use widgets::{Gadget, Widget};

impl Nameable for Widget {}
impl Nameable for Gadget {}

fn setup(build: BuildMode) -> (Arc<MemoryLogSink>, LogServiceImpl) {
    let sink = Arc::new(MemoryLogSink::new());
    let service = LogServiceImpl::new(sink.clone(), build);
    (sink, service)
}

#[test]
fn release_debug_performs_no_writes() {
    let (sink, service) = setup(BuildMode::Release);
    let callers: [&dyn Nameable; 3] = [&Widget, &Gadget { id: 1 }, &TypeOf::<Widget>::new()];
    for caller in callers {
        service.debug(caller, Some("literal"), &[]).unwrap();
    }
    assert!(!service.is_debuggable());
    assert!(sink.is_empty());
}

#[test]
fn debug_build_writes_exactly_once() {
    let (sink, service) = setup(BuildMode::Debug);
    let callers: [&dyn Nameable; 3] = [&Widget, &Gadget { id: 1 }, &Tag::new("Main")];
    for caller in callers {
        service.debug(caller, Some("literal"), &[]).unwrap();
        let records = sink.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Debug);
        assert_eq!(records[0].message, "literal");
    }
}

#[test]
fn info_always_writes_once() {
    for build in [BuildMode::Debug, BuildMode::Release] {
        let (sink, service) = setup(build);
        service.info(&Widget, Some("plain"), &[]).unwrap();
        service
            .info(&Gadget { id: 7 }, Some("gadget %d"), &[LogArg::UInt(7)])
            .unwrap();
        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.severity == Severity::Info));
        assert_eq!(records[1].message, "gadget 7");
    }
}

#[test]
fn tag_resolution_is_idempotent() {
    let gadget = Gadget { id: 2 };
    let first = gadget.tag();
    assert_eq!(first, gadget.tag());
    assert_eq!(first.as_str(), "Gadget");
    assert_eq!(gadget.id, 2);
}

#[test]
fn type_reference_and_instance_share_a_tag() {
    let (sink, service) = setup(BuildMode::Debug);
    service.info(&TypeOf::<Widget>::new(), Some("static"), &[]).unwrap();
    service.info(&Widget, Some("instance"), &[]).unwrap();
    let tags: Vec<_> = sink.records().into_iter().map(|r| r.tag).collect();
    assert_eq!(tags, [Tag::new("Widget"), Tag::new("Widget")]);
}

#[test]
fn zero_arguments_leave_the_template_verbatim() {
    let (sink, service) = setup(BuildMode::Debug);
    service.info(&Widget, Some("100% done"), &[]).unwrap();
    service.debug(&Widget, Some("%d %s {}"), &[]).unwrap();
    let messages: Vec<_> = sink.records().into_iter().map(|r| r.message).collect();
    assert_eq!(messages, ["100% done", "%d %s {}"]);
}

#[test]
fn integer_placeholder_checks_argument_type() {
    let (sink, service) = setup(BuildMode::Debug);
    service.info(&Widget, Some("%d items"), &[LogArg::Int(3)]).unwrap();
    assert_eq!(sink.take()[0].message, "3 items");

    let result = service.info(&Widget, Some("%d items"), &["x".into()]);
    assert!(matches!(
        result,
        Err(LogError::Format(FormatError::IllegalConversion { .. }))
    ));
    assert!(sink.is_empty());
}

#[test]
fn absent_template_fails_before_writing() {
    let (sink, service) = setup(BuildMode::Release);
    let result = service.info(&Widget, None, &[LogArg::Int(1)]);
    assert!(matches!(result, Err(LogError::NullTemplate)));
    assert!(sink.is_empty());
}

#[test]
fn macros_convert_arguments() {
    let (sink, service) = setup(BuildMode::Debug);
    let name = String::from("cart");
    log_info!(service, &Widget, "%s has %d items at %.2f", &name, 3, 9.5).unwrap();
    log_debug!(service, &Widget, "optional %s", None::<&str>).unwrap();
    log_info!(service, &Widget, "no args, 5% off").unwrap();
    let messages: Vec<_> = sink.records().into_iter().map(|r| r.message).collect();
    assert_eq!(
        messages,
        ["cart has 3 items at 9.50", "optional null", "no args, 5% off"]
    );
}

#[test]
fn debug_macro_skips_arguments_in_release() {
    let (sink, service) = setup(BuildMode::Release);
    let evaluated = Cell::new(false);
    let expensive = || {
        evaluated.set(true);
        42
    };
    log_debug!(service, &Widget, "answer %d", expensive()).unwrap();
    assert!(!evaluated.get());
    assert!(sink.is_empty());
}

#[test]
fn service_is_shareable_across_threads() {
    let sink = Arc::new(MemoryLogSink::new());
    let service = Arc::new(LogServiceImpl::new(sink.clone(), BuildMode::Debug));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let service = service.clone();
            thread::spawn(move || {
                log_info!(service, &Widget, "worker %d", worker).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let mut messages: Vec<_> = sink.records().into_iter().map(|r| r.message).collect();
    messages.sort();
    assert_eq!(messages, ["worker 0", "worker 1", "worker 2", "worker 3"]);
}
