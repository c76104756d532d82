//! Revision code decoding.
//!
//! The firmware reports a 32-bit revision code in the system info file.
//! Two encodings exist, told apart by bit 23:
//!
//! - **Legacy** (bit 23 clear): the low 16 bits are an opaque key into a
//!   fixed table of early boards.
//! - **Structured** (bit 23 set): independent bit fields
//!
//! ```text
//!  22..20  memory size    0=256MB 1=512MB 2=1GB
//!  15..12  processor      0=BCM2835 1=BCM2836 2=BCM2837
//!  11..4   board type
//!   3..0   board revision (minor, major is always 1)
//! ```
//!
//! See <https://www.raspberrypi.org/documentation/hardware/raspberrypi/revision-codes/README.md>.
//!
//! Decoding is total: every `u32` produces a [`DecodedRevision`]. The two
//! paths have different notions of "unknown". An unlisted legacy code yields
//! the all-unknown tuple, while an unlisted structured field falls back to the
//! first table entry (256MB, BCM2835) except for the board type, which
//! becomes [`Model::Unknown`].

use serde::{Deserialize, Serialize};

use super::model::{Model, Processor, SiliconVersion};
use crate::error::{BoardError, BoardResult};

/// Flag selecting the structured encoding
pub const STRUCTURED_FLAG: u32 = 0x0080_0000;

const MEMORY_MASK: u32 = 0x0070_0000;
const MEMORY_SHIFT: u32 = 20;
const PROCESSOR_MASK: u32 = 0x0000_F000;
const PROCESSOR_SHIFT: u32 = 12;
const TYPE_MASK: u32 = 0x0000_0FF0;
const TYPE_SHIFT: u32 = 4;
const REVISION_MASK: u32 = 0x0000_000F;
const LEGACY_MASK: u32 = 0x0000_FFFF;

/// Which encoding a revision code uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisionScheme {
    Legacy,
    Structured,
}

impl RevisionScheme {
    pub fn of(code: u32) -> Self {
        if code & STRUCTURED_FLAG == 0 {
            RevisionScheme::Legacy
        } else {
            RevisionScheme::Structured
        }
    }
}

/// Board facts derived from a revision code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRevision {
    pub model: Model,
    pub version: SiliconVersion,
    pub memory_mb: u32,
    pub processor: Processor,
}

impl DecodedRevision {
    const fn new(model: Model, major: u32, minor: u32, memory_mb: u32, processor: Processor) -> Self {
        Self {
            model,
            version: SiliconVersion::new(major, minor),
            memory_mb,
            processor,
        }
    }

    /// The result for a legacy code outside the table
    pub const UNKNOWN: DecodedRevision = DecodedRevision::new(Model::Unknown, 0, 0, 0, Processor::Unknown);
}

/// Decode a revision code
pub fn decode(code: u32) -> DecodedRevision {
    match RevisionScheme::of(code) {
        RevisionScheme::Legacy => decode_legacy(code),
        RevisionScheme::Structured => decode_structured(code),
    }
}

fn decode_legacy(code: u32) -> DecodedRevision {
    use Model::*;
    use Processor::Bcm2835;

    match code & LEGACY_MASK {
        0x02 | 0x03 => DecodedRevision::new(BRev1, 1, 0, 256, Bcm2835),
        0x04..=0x06 => DecodedRevision::new(BRev2, 2, 0, 256, Bcm2835),
        0x07..=0x09 => DecodedRevision::new(A, 2, 0, 256, Bcm2835),
        0x0d..=0x0f => DecodedRevision::new(BRev2, 2, 0, 512, Bcm2835),
        0x10 => DecodedRevision::new(BPlus, 1, 0, 512, Bcm2835),
        0x11 | 0x14 => DecodedRevision::new(ComputeModule, 1, 0, 512, Bcm2835),
        0x12 => DecodedRevision::new(APlus, 1, 1, 256, Bcm2835),
        0x13 => DecodedRevision::new(BPlus, 1, 2, 512, Bcm2835),
        // Shipped with either 256MB or 512MB under the same code
        0x15 => DecodedRevision::new(APlus, 1, 1, 512, Bcm2835),
        _ => DecodedRevision::UNKNOWN,
    }
}

fn decode_structured(code: u32) -> DecodedRevision {
    DecodedRevision {
        model: structured_model((code & TYPE_MASK) >> TYPE_SHIFT),
        version: SiliconVersion::new(1, code & REVISION_MASK),
        memory_mb: structured_memory((code & MEMORY_MASK) >> MEMORY_SHIFT),
        processor: structured_processor((code & PROCESSOR_MASK) >> PROCESSOR_SHIFT),
    }
}

// Unlisted values fall back to 256MB, not to 0.
fn structured_memory(bits: u32) -> u32 {
    match bits {
        1 => 512,
        2 => 1024,
        _ => 256,
    }
}

// Unlisted values fall back to BCM2835, not to Unknown.
fn structured_processor(bits: u32) -> Processor {
    match bits {
        1 => Processor::Bcm2836,
        2 => Processor::Bcm2837,
        _ => Processor::Bcm2835,
    }
}

fn structured_model(bits: u32) -> Model {
    match bits {
        0x00 => Model::A,
        0x02 => Model::APlus,
        0x03 => Model::BPlus,
        0x04 => Model::B2,
        0x06 => Model::ComputeModule,
        0x08 => Model::B3,
        0x09 => Model::Zero,
        0x0a => Model::ComputeModule3,
        0x0c => Model::ZeroW,
        _ => Model::Unknown,
    }
}

/// Parse revision code text as it appears in the system info file:
/// hexadecimal digits without a prefix.
pub fn parse_cpuinfo_revision(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}

/// Parse user-supplied revision code text, accepting an optional `0x` prefix.
pub fn parse_revision_code(text: &str) -> BoardResult<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    parse_cpuinfo_revision(digits)
        .ok_or_else(|| BoardError::Parse(format!("'{}' is not a hexadecimal revision code", text)))
}
