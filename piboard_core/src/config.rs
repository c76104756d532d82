//! Centralized configuration for piboard.
//!
//! Defaults live here as constants. Each can be overridden by an environment
//! variable so the library can be pointed at captured system-info files.

use std::path::PathBuf;

/// Default location of the kernel's processor information file.
/// Override with `PIBOARD_CPUINFO` environment variable.
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Environment variable that overrides [`DEFAULT_CPUINFO_PATH`].
pub const CPUINFO_PATH_ENV: &str = "PIBOARD_CPUINFO";

/// Get the cpuinfo path from env var or default.
pub fn cpuinfo_path() -> PathBuf {
    std::env::var_os(CPUINFO_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CPUINFO_PATH))
}
