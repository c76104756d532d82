//! Revision code decoding against published board codes.

use piboard_core::board::{
    decode, resolve_connector, ConnectorLayout, DecodedRevision, Model, Processor,
    SiliconVersion,
};

fn expect(codes: &[u32], model: Model, version: (u32, u32), memory_mb: u32, processor: Processor) {
    let expected = DecodedRevision {
        model,
        version: SiliconVersion::new(version.0, version.1),
        memory_mb,
        processor,
    };
    for &code in codes {
        assert_eq!(decode(code), expected, "revision code {:#08x}", code);
    }
}

// ============================================================================
// Legacy codes
// ============================================================================

#[test]
fn test_legacy_b_rev1() {
    expect(&[0x0002, 0x0003], Model::BRev1, (1, 0), 256, Processor::Bcm2835);
}

#[test]
fn test_legacy_b_rev2() {
    expect(&[0x0004, 0x0005, 0x0006], Model::BRev2, (2, 0), 256, Processor::Bcm2835);
}

#[test]
fn test_legacy_a_rev2() {
    expect(&[0x0007, 0x0008, 0x0009], Model::A, (2, 0), 256, Processor::Bcm2835);
}

#[test]
fn test_legacy_b_rev2_512mb() {
    expect(&[0x000d, 0x000e, 0x000f], Model::BRev2, (2, 0), 512, Processor::Bcm2835);
}

#[test]
fn test_legacy_b_plus() {
    expect(&[0x0010], Model::BPlus, (1, 0), 512, Processor::Bcm2835);
    expect(&[0x0013], Model::BPlus, (1, 2), 512, Processor::Bcm2835);
}

#[test]
fn test_legacy_compute_module() {
    expect(&[0x0011, 0x0014], Model::ComputeModule, (1, 0), 512, Processor::Bcm2835);
}

#[test]
fn test_legacy_a_plus() {
    expect(&[0x0012], Model::APlus, (1, 1), 256, Processor::Bcm2835);
    expect(&[0x0015], Model::APlus, (1, 1), 512, Processor::Bcm2835);
}

#[test]
fn test_legacy_unlisted_is_unknown() {
    expect(&[0x0000, 0x0001, 0x000b, 0x0016, 0x1234], Model::Unknown, (0, 0), 0, Processor::Unknown);
}

// ============================================================================
// Structured codes
// ============================================================================

#[test]
fn test_structured_a_plus() {
    expect(&[0x900021], Model::APlus, (1, 1), 512, Processor::Bcm2835);
}

#[test]
fn test_structured_b_plus() {
    expect(&[0x900032], Model::BPlus, (1, 2), 512, Processor::Bcm2835);
}

#[test]
fn test_structured_zero() {
    expect(&[0x900092], Model::Zero, (1, 2), 512, Processor::Bcm2835);
    expect(&[0x900093, 0x920093], Model::Zero, (1, 3), 512, Processor::Bcm2835);
}

#[test]
fn test_structured_zero_w() {
    expect(&[0x9000c1], Model::ZeroW, (1, 1), 512, Processor::Bcm2835);
}

#[test]
fn test_structured_2b() {
    expect(&[0xa01040], Model::B2, (1, 0), 1024, Processor::Bcm2836);
    expect(&[0xa01041, 0xa21041], Model::B2, (1, 1), 1024, Processor::Bcm2836);
    expect(&[0xa22042], Model::B2, (1, 2), 1024, Processor::Bcm2837);
}

#[test]
fn test_structured_3b() {
    expect(&[0xa02082, 0xa22082, 0xa32082], Model::B3, (1, 2), 1024, Processor::Bcm2837);
}

#[test]
fn test_structured_compute_module_3() {
    expect(&[0xa020a0], Model::ComputeModule3, (1, 0), 1024, Processor::Bcm2837);
}

#[test]
fn test_structured_fallbacks_use_first_entry() {
    // Pi 4 (BCM2711, 2GB, type 0x11) is newer than every table here
    let d = decode(0xb03111);
    assert_eq!(d.model, Model::Unknown);
    assert_eq!(d.memory_mb, 256);
    assert_eq!(d.processor, Processor::Bcm2835);
    assert_eq!(d.version, SiliconVersion::new(1, 1));
}

// ============================================================================
// Connector layout
// ============================================================================

#[test]
fn test_connector_follows_decoded_model() {
    assert_eq!(resolve_connector(decode(0x0002).model), ConnectorLayout::Rev1);
    assert_eq!(resolve_connector(decode(0x000e).model), ConnectorLayout::Rev2);
    assert_eq!(resolve_connector(decode(0x0008).model), ConnectorLayout::Rev2);
    assert_eq!(resolve_connector(decode(0xa22082).model), ConnectorLayout::Plus);
    assert_eq!(resolve_connector(decode(0xb03111).model), ConnectorLayout::Unknown);
}

#[test]
fn test_decode_is_total() {
    // Sample across the whole range; must never panic
    let mut code: u32 = 0;
    loop {
        let _ = decode(code);
        match code.checked_add(0x0001_0001) {
            Some(next) => code = next,
            None => break,
        }
    }
    let _ = decode(u32::MAX);
}
