//! Per-core processor information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Information about one processor core, as listed in the system info file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreInfo {
    /// Core ordinal as declared by the kernel
    index: i32,
    pub model_name: String,
    pub bogo_mips: f64,
    pub features: String,
    pub implementer: u32,
    pub architecture: u32,
    pub variant: u32,
    pub part: u32,
    pub revision: u32,
}

/// Keys recognised inside a processor block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreKey {
    ModelName,
    BogoMips,
    Features,
    Implementer,
    Architecture,
    Variant,
    Part,
    Revision,
}

impl CoreKey {
    /// Map a normalised (trimmed, lowercase) key to a core key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "model name" => Some(CoreKey::ModelName),
            "bogomips" => Some(CoreKey::BogoMips),
            "features" => Some(CoreKey::Features),
            "cpu implementer" => Some(CoreKey::Implementer),
            "cpu architecture" => Some(CoreKey::Architecture),
            "cpu variant" => Some(CoreKey::Variant),
            "cpu part" => Some(CoreKey::Part),
            "cpu revision" => Some(CoreKey::Revision),
            _ => None,
        }
    }
}

impl CoreInfo {
    pub fn new(index: i32) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// Apply one key/value pair. Later values for the same key win.
    pub fn apply(&mut self, key: CoreKey, value: &str) {
        match key {
            CoreKey::ModelName => self.model_name = value.to_string(),
            CoreKey::BogoMips => self.bogo_mips = value.parse().unwrap_or(0.0),
            CoreKey::Features => self.features = value.to_string(),
            CoreKey::Implementer => self.implementer = parse_id_field(value),
            CoreKey::Architecture => self.architecture = parse_id_field(value),
            CoreKey::Variant => self.variant = parse_id_field(value),
            CoreKey::Part => self.part = parse_id_field(value),
            CoreKey::Revision => self.revision = parse_id_field(value),
        }
    }

    /// Feature flags as individual words
    pub fn feature_list(&self) -> impl Iterator<Item = &str> {
        self.features.split_whitespace()
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.feature_list().any(|f| f == feature)
    }
}

/// CPU id fields are `0x`-prefixed hex, except architecture and revision
/// which the kernel prints in decimal.
fn parse_id_field(value: &str) -> u32 {
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).unwrap_or(0),
        None => value.parse().unwrap_or(0),
    }
}

impl fmt::Display for CoreInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Core:\t\t{}", self.index)?;
        writeln!(f, "Model name:\t{}", self.model_name)?;
        writeln!(f, "BogoMIPS:\t{}", self.bogo_mips)?;
        writeln!(f, "Features:\t{}", self.features)?;
        writeln!(
            f,
            "CPU id:\t\timplementer 0x{:02x}, architecture {}, variant 0x{:x}, part 0x{:03x}, revision {}",
            self.implementer, self.architecture, self.variant, self.part, self.revision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_key_lookup() {
        assert_eq!(CoreKey::from_key("model name"), Some(CoreKey::ModelName));
        assert_eq!(CoreKey::from_key("cpu part"), Some(CoreKey::Part));
        assert_eq!(CoreKey::from_key("MODEL NAME"), None);
        assert_eq!(CoreKey::from_key("hardware"), None);
    }

    #[test]
    fn test_apply_cortex_a53() {
        let mut core = CoreInfo::new(2);
        core.apply(CoreKey::ModelName, "ARMv7 Processor rev 4 (v7l)");
        core.apply(CoreKey::BogoMips, "38.40");
        core.apply(CoreKey::Features, "half thumb fastmult vfp edsp neon");
        core.apply(CoreKey::Implementer, "0x41");
        core.apply(CoreKey::Architecture, "7");
        core.apply(CoreKey::Variant, "0x0");
        core.apply(CoreKey::Part, "0xd03");
        core.apply(CoreKey::Revision, "4");

        assert_eq!(core.index(), 2);
        assert_eq!(core.bogo_mips, 38.40);
        assert_eq!(core.implementer, 0x41);
        assert_eq!(core.architecture, 7);
        assert_eq!(core.part, 0xd03);
        assert_eq!(core.revision, 4);
        assert!(core.has_feature("neon"));
        assert!(!core.has_feature("ne"));
    }

    #[test]
    fn test_malformed_numbers_default_to_zero() {
        let mut core = CoreInfo::new(0);
        core.apply(CoreKey::BogoMips, "fast");
        core.apply(CoreKey::Part, "0xzz");
        core.apply(CoreKey::Architecture, "7 (AArch64)");
        assert_eq!(core.bogo_mips, 0.0);
        assert_eq!(core.part, 0);
        assert_eq!(core.architecture, 0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut core = CoreInfo::new(0);
        core.apply(CoreKey::Features, "vfp");
        core.apply(CoreKey::Features, "vfp neon");
        assert_eq!(core.features, "vfp neon");
    }

    #[test]
    fn test_display_lists_index_first() {
        let core = CoreInfo::new(3);
        assert!(core.to_string().starts_with("Core:\t\t3\n"));
    }
}
