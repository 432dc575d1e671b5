use debugger::application_impl::*;
use debugger::domain_model::*;
use debugger::infra_memory::*;
use debugger::infra_tracing::*;
use debugger::logger::*;
use debugger::{log_debug, log_info};
use std::sync::Arc;

struct Checkout {
    items: u32,
}

impl Nameable for Checkout {}

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap(BuildMode::Debug)?;

    let service = LogServiceImpl::new(Arc::new(TracingLogSink::new()), BuildMode::Debug);
    let checkout = Checkout { items: 3 };
    log_debug!(service, &checkout, "%d items, total %,.2f", checkout.items, 1234.5)?;
    log_info!(service, &TypeOf::<Checkout>::new(), "100% done")?;

    // Raising the filter hides debug records even in a debug build.
    logger.reload_from_config(&LogConfig {
        filter: "info".to_string(),
    })?;
    log_debug!(service, &checkout, "hidden by the filter")?;
    log_info!(service, &checkout, "still visible")?;

    // A release-mode service never reaches its sink for debug records.
    let sink = Arc::new(MemoryLogSink::new());
    let release = LogServiceImpl::new(sink.clone(), BuildMode::Release);
    log_debug!(release, &checkout, "dropped %s", "silently")?;
    log_info!(release, &checkout, "kept")?;
    info!(records = sink.len(), "release-mode sink");

    Ok(())
}
