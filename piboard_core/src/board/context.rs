//! Shared access to the decoded board description.
//!
//! Prefer constructing a [`BoardContext`] once at startup and handing clones
//! to the consumers that need it. [`current`] exists for code that cannot
//! thread a handle through; it scans the configured file exactly once.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::description::HardwareDescription;

static CURRENT: OnceLock<HardwareDescription> = OnceLock::new();

/// Get the process-wide description, scanning on first access.
///
/// Racing first callers block until one scan completes; all of them observe
/// the same fully built instance.
pub fn current() -> &'static HardwareDescription {
    CURRENT.get_or_init(HardwareDescription::detect)
}

/// Cheaply clonable handle to one decoded board description
#[derive(Debug, Clone)]
pub struct BoardContext {
    description: Arc<HardwareDescription>,
}

impl BoardContext {
    pub fn new(description: HardwareDescription) -> Self {
        Self {
            description: Arc::new(description),
        }
    }

    /// Scan the configured system info file
    pub fn detect() -> Self {
        Self::new(HardwareDescription::detect())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(HardwareDescription::load_from(path))
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(HardwareDescription::scan(lines))
    }

    pub fn description(&self) -> &HardwareDescription {
        &self.description
    }

    pub fn is_supported(&self) -> bool {
        self.description.is_supported()
    }
}

impl std::ops::Deref for BoardContext {
    type Target = HardwareDescription;

    fn deref(&self) -> &Self::Target {
        &self.description
    }
}
