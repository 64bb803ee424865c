#[path = "../common/mod.rs"]
mod common;

use libnfctag::felica::{decode_read, decode_write, encode_read, Frame};
use libnfctag::types::{AccessMode, BlockElement, ServiceCode};
use libnfctag::Error;
use proptest::prelude::*;

#[test]
fn read_command_layout() {
    let services = [ServiceCode::FELICA_LITE_RO];
    let blocks = [
        BlockElement::new(0, AccessMode::DirectAccessOrRead, 0),
        BlockElement::new(0, AccessMode::DirectAccessOrRead, 1),
    ];
    let payload = encode_read(common::fixtures::sample_idm(), &services, &blocks);

    assert_eq!(payload[0], 0x06);
    assert_eq!(&payload[1..9], &common::fixtures::sample_idm_bytes());
    assert_eq!(payload[9], 1); // one service
    assert_eq!(&payload[10..12], &ServiceCode::FELICA_LITE_RO.to_le_bytes());
    assert_eq!(payload[12], 2); // two block elements
    // short-form elements: length bit + access mode b6-b4 + service order
    assert_eq!(&payload[13..], &[0xA0, 0x00, 0xA0, 0x01]);
}

#[test]
fn block_element_long_form_for_high_block_numbers() {
    let services = [ServiceCode::FELICA_LITE_RO];
    let blocks = [BlockElement::new(0, AccessMode::DirectAccessOrRead, 0x0134)];
    let payload = encode_read(common::fixtures::sample_idm(), &services, &blocks);
    // 3-byte element, block number little-endian
    assert_eq!(&payload[13..], &[0x20, 0x34, 0x01]);
}

#[test]
fn read_response_roundtrips_through_frame() {
    let frame = common::fixtures::felica_read_frame(&[[0x11; 16], [0x22; 16]]);
    let payload = Frame::decode(&frame).unwrap();
    let (idm, blocks) = decode_read(&payload).unwrap();

    assert_eq!(idm, common::fixtures::sample_idm());
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].as_bytes(), &[0x22; 16]);
}

#[test]
fn write_response_status_flags() {
    let frame = common::fixtures::felica_write_frame(0x00, 0x00);
    let payload = Frame::decode(&frame).unwrap();
    assert!(decode_write(&payload).is_ok());

    let frame = common::fixtures::felica_write_frame(0x01, 0xA6);
    let payload = Frame::decode(&frame).unwrap();
    assert!(matches!(
        decode_write(&payload),
        Err(Error::FelicaStatus {
            status1: 0x01,
            status2: 0xA6
        })
    ));
}

#[test]
fn frame_length_byte_counts_itself() {
    let frame = Frame::encode(&[0x06, 0x01]).unwrap();
    assert_eq!(frame, vec![0x03, 0x06, 0x01]);
}

proptest! {
    #[test]
    fn felica_decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..96)) {
        let _ = decode_read(&data);
        let _ = decode_write(&data);
        let _ = Frame::decode(&data);
    }
}
