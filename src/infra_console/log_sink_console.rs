use crate::domain_model::{Severity, Tag};
use crate::domain_port::LogSink;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Writes one `D/Tag: message` line per record.
pub struct ConsoleLogSink<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleLogSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleLogSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for ConsoleLogSink<W> {
    fn write(&self, severity: Severity, tag: &Tag, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}/{}: {}", severity.code(), tag, message) {
            warn!("console sink write failed: {}", e);
        }
    }
}
