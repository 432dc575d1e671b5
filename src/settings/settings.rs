use crate::domain_model::BuildMode;
use crate::domain_port::LogSink;
use crate::infra_console::ConsoleLogSink;
use crate::infra_tracing::TracingLogSink;
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub sink: Sink,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Sink {
    pub backend: String, // "tracing" or "console"
}

impl Sink {
    pub fn try_build(&self) -> Result<Arc<dyn LogSink>> {
        match self.backend.as_str() {
            "tracing" => Ok(Arc::new(TracingLogSink::new())),
            "console" => Ok(Arc::new(ConsoleLogSink::stdout())),
            other => Err(anyhow!("unknown sink backend: {other:?}")),
        }
    }
}

const DEV_SETTINGS_PATH: &str = "settings/dev.toml";
const RELEASE_SETTINGS_PATH: &str = "settings/release.toml";

pub fn default_settings_path(build: BuildMode) -> &'static str {
    match build {
        BuildMode::Debug => DEV_SETTINGS_PATH,
        BuildMode::Release => RELEASE_SETTINGS_PATH,
    }
}

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(default_settings_path(BuildMode::current()));

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
