use crate::domain_model::{Severity, Tag};
use crate::domain_port::LogSink;

/// Forwards records to `tracing` under the `debugger` target, with the tag
/// as a `tag` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn write(&self, severity: Severity, tag: &Tag, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "debugger", tag = %tag, "{message}"),
            Severity::Info => tracing::info!(target: "debugger", tag = %tag, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<Vec<(Level, String, String, String)>>>;

    struct CaptureLayer(Captured);

    #[derive(Default)]
    struct Fields {
        tag: String,
        message: String,
    }

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "tag" => self.tag = format!("{value:?}"),
                "message" => self.message = format!("{value:?}"),
                _ => {}
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            let metadata = event.metadata();
            self.0.lock().unwrap().push((
                *metadata.level(),
                metadata.target().to_string(),
                fields.tag,
                fields.message,
            ));
        }
    }

    #[test]
    fn test_severity_maps_to_level() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingLogSink::new();
            sink.write(Severity::Debug, &Tag::new("Widget"), "3 items");
            sink.write(Severity::Info, &Tag::new("Main"), "100% done");
        });

        let events = captured.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (
                    Level::DEBUG,
                    "debugger".to_string(),
                    "Widget".to_string(),
                    "3 items".to_string()
                ),
                (
                    Level::INFO,
                    "debugger".to_string(),
                    "Main".to_string(),
                    "100% done".to_string()
                ),
            ]
        );
    }
}
