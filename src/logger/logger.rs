use crate::domain_model::BuildMode;
use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct LogConfig {
    pub filter: String,
}

impl LogConfig {
    /// Debug builds show debug records by default, release builds start at info.
    pub fn for_build(build: BuildMode) -> Self {
        let filter = if build.is_debug() { "debug" } else { "info" };
        Self {
            filter: filter.to_string(),
        }
    }
}

pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Logger {
    pub fn new_bootstrap(build: BuildMode) -> Result<Self> {
        let config = LogConfig::for_build(build);
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .map_err(|e| anyhow!(e))?;

        Ok(Self { reload_handle })
    }

    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_per_build() {
        assert_eq!(LogConfig::for_build(BuildMode::Debug).filter, "debug");
        assert_eq!(LogConfig::for_build(BuildMode::Release).filter, "info");
    }
}
