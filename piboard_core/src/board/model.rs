//! Closed enumerations describing a Raspberry Pi board.
//!
//! These are pure data. Decoding lives in [`super::revision`], connector
//! mapping in [`super::connector`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[default]
    Unknown,
    A,
    APlus,
    BRev1,
    BRev2,
    BPlus,
    B2,
    B3,
    Zero,
    ZeroW,
    ComputeModule,
    ComputeModule3,
}

impl Model {
    /// Every model, in declaration order
    pub const ALL: [Model; 12] = [
        Model::Unknown,
        Model::A,
        Model::APlus,
        Model::BRev1,
        Model::BRev2,
        Model::BPlus,
        Model::B2,
        Model::B3,
        Model::Zero,
        Model::ZeroW,
        Model::ComputeModule,
        Model::ComputeModule3,
    ];

    /// Get human-readable board name
    pub fn name(&self) -> &'static str {
        match self {
            Model::Unknown => "Unknown",
            Model::A => "Raspberry Pi Model A",
            Model::APlus => "Raspberry Pi Model A+",
            Model::BRev1 => "Raspberry Pi Model B (Rev 1)",
            Model::BRev2 => "Raspberry Pi Model B (Rev 2)",
            Model::BPlus => "Raspberry Pi Model B+",
            Model::B2 => "Raspberry Pi 2 Model B",
            Model::B3 => "Raspberry Pi 3 Model B",
            Model::Zero => "Raspberry Pi Zero",
            Model::ZeroW => "Raspberry Pi Zero W",
            Model::ComputeModule => "Raspberry Pi Compute Module",
            Model::ComputeModule3 => "Raspberry Pi Compute Module 3",
        }
    }

    /// Check if this is a Compute Module variant
    pub fn is_compute_module(&self) -> bool {
        matches!(self, Model::ComputeModule | Model::ComputeModule3)
    }

    /// Check if this is a Zero variant
    pub fn is_zero(&self) -> bool {
        matches!(self, Model::Zero | Model::ZeroW)
    }

    pub fn is_known(&self) -> bool {
        *self != Model::Unknown
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Broadcom SoC family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Processor {
    #[default]
    Unknown,
    /// Formerly referred to as BCM2708
    Bcm2835,
    /// Formerly referred to as BCM2709
    Bcm2836,
    Bcm2837,
}

impl Processor {
    pub fn name(&self) -> &'static str {
        match self {
            Processor::Unknown => "Unknown",
            Processor::Bcm2835 => "BCM2835",
            Processor::Bcm2836 => "BCM2836",
            Processor::Bcm2837 => "BCM2837",
        }
    }

    /// Number of ARM cores the SoC carries (0 when unknown)
    pub fn core_count(&self) -> u32 {
        match self {
            Processor::Unknown => 0,
            Processor::Bcm2835 => 1,
            Processor::Bcm2836 | Processor::Bcm2837 => 4,
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// GPIO header pinout generation
///
/// See <http://raspi.tv/2014/rpi-gpio-quick-reference-updated-for-raspberry-pi-b>.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorLayout {
    #[default]
    Unknown,
    /// Original 26-pin header of the first Model B
    Rev1,
    /// 26-pin header with the revised I2C/GPIO assignment
    Rev2,
    /// 40-pin header
    Plus,
}

impl ConnectorLayout {
    pub fn name(&self) -> &'static str {
        match self {
            ConnectorLayout::Unknown => "Unknown",
            ConnectorLayout::Rev1 => "26-pin (Rev 1)",
            ConnectorLayout::Rev2 => "26-pin (Rev 2)",
            ConnectorLayout::Plus => "40-pin",
        }
    }

    /// Number of pins on the header
    pub fn pin_count(&self) -> u32 {
        match self {
            ConnectorLayout::Unknown => 0,
            ConnectorLayout::Rev1 | ConnectorLayout::Rev2 => 26,
            ConnectorLayout::Plus => 40,
        }
    }
}

impl fmt::Display for ConnectorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Silicon (PCB) revision of a board, e.g. 1.2.
///
/// This is a hardware revision, not a software version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiliconVersion {
    pub major: u32,
    pub minor: u32,
}

impl SiliconVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for SiliconVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unknown() {
        assert_eq!(Model::default(), Model::Unknown);
        assert_eq!(Processor::default(), Processor::Unknown);
        assert_eq!(ConnectorLayout::default(), ConnectorLayout::Unknown);
        assert_eq!(SiliconVersion::default(), SiliconVersion::new(0, 0));
    }

    #[test]
    fn test_model_names() {
        assert_eq!(Model::B3.name(), "Raspberry Pi 3 Model B");
        assert_eq!(Model::ZeroW.name(), "Raspberry Pi Zero W");
        assert_eq!(Model::BPlus.to_string(), "BPlus");
    }

    #[test]
    fn test_model_families() {
        assert!(Model::ComputeModule3.is_compute_module());
        assert!(!Model::B3.is_compute_module());
        assert!(Model::ZeroW.is_zero());
        assert!(!Model::Unknown.is_known());
    }

    #[test]
    fn test_processor_cores() {
        assert_eq!(Processor::Bcm2835.core_count(), 1);
        assert_eq!(Processor::Bcm2837.core_count(), 4);
        assert_eq!(Processor::Unknown.core_count(), 0);
        assert_eq!(Processor::Bcm2836.name(), "BCM2836");
    }

    #[test]
    fn test_silicon_version_display() {
        assert_eq!(SiliconVersion::new(1, 2).to_string(), "1.2");
        assert!(SiliconVersion::new(2, 0) > SiliconVersion::new(1, 15));
    }
}
