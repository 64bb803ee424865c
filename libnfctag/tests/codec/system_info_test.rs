#[path = "../common/mod.rs"]
mod common;

use libnfctag::iso15693::responses::SystemInformationResponse;
use proptest::prelude::*;

#[test]
fn full_system_information() {
    let payload = common::fixtures::sysinfo_payload_full();
    let resp = SystemInformationResponse::decode(&payload).unwrap();
    let info = resp.info.unwrap();

    assert_eq!(info.uid, common::fixtures::sample_uid());
    assert_eq!(info.dsfid, Some(0x1B));
    assert_eq!(info.afi, Some(0x55));
    let mem = info.memory_info.unwrap();
    assert_eq!(mem.number_of_blocks(), 16);
    assert_eq!(mem.block_size(), 4);
}

#[test]
fn memory_only_system_information() {
    let payload = common::fixtures::sysinfo_payload_memory(0x3F, 0x07);
    let info = SystemInformationResponse::decode(&payload)
        .unwrap()
        .info
        .unwrap();
    assert_eq!(info.dsfid, None);
    assert_eq!(info.afi, None);
    let mem = info.memory_info.unwrap();
    assert_eq!(mem.number_of_blocks(), 64);
    assert_eq!(mem.block_size(), 8);
}

#[test]
fn absent_afi_shifts_memory_offset() {
    // info_flags 0x05: DSFID and memory size present, AFI absent. The
    // memory bytes follow the DSFID directly.
    let mut payload = vec![0x00, 0x05];
    payload.extend_from_slice(&common::fixtures::sample_uid_bytes());
    payload.push(0x1B);
    payload.extend_from_slice(&[0x0F, 0x03]);

    let info = SystemInformationResponse::decode(&payload)
        .unwrap()
        .info
        .unwrap();
    assert_eq!(info.dsfid, Some(0x1B));
    assert_eq!(info.afi, None);
    assert_eq!(info.memory_info.unwrap().number_of_blocks(), 16);
}

#[test]
fn error_response_has_no_info() {
    let resp = SystemInformationResponse::decode(&[0x01, 0x0F]).unwrap();
    assert!(resp.has_error());
    assert!(resp.info.is_none());
}

proptest! {
    #[test]
    fn sysinfo_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = SystemInformationResponse::decode(&data);
    }

    // Wire geometry bytes are zero-origin; decoded values are one-origin
    // and always >= 1.
    #[test]
    fn memory_geometry_is_one_origin(blocks_wire in any::<u8>(), size_wire in any::<u8>()) {
        let payload = common::fixtures::sysinfo_payload_memory(blocks_wire, size_wire);
        let info = SystemInformationResponse::decode(&payload).unwrap().info.unwrap();
        let mem = info.memory_info.unwrap();
        prop_assert!(mem.number_of_blocks() >= 1);
        prop_assert!((1..=32).contains(&mem.block_size()));
    }
}
