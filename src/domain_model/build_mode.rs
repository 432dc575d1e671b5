use std::fmt;

/// Build configuration the logging service runs under.
///
/// Fixed when the artifact is built. Debug-level records are only
/// emitted in `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    pub const fn is_debug(self) -> bool {
        matches!(self, BuildMode::Debug)
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => f.write_str("debug"),
            BuildMode::Release => f.write_str("release"),
        }
    }
}
