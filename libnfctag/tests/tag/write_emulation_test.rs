#[path = "../common/mod.rs"]
mod common;

use libnfctag::constants::ISO15693_CMD_WRITE_SINGLE_BLOCK;
use libnfctag::tag::Iso15693Tag;
use libnfctag::transport::MockTransceive;
use libnfctag::Error;

fn tag_with(mock: MockTransceive) -> Iso15693Tag<MockTransceive> {
    Iso15693Tag::new(mock, common::fixtures::sample_uid(), 0x00)
}

#[test]
fn multi_block_write_pads_the_last_chunk() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::sysinfo_payload_memory(0x0F, 0x03));
    for _ in 0..3 {
        mock.push_response(vec![0x00]);
    }

    let mut tag = tag_with(mock);
    // 10 bytes over 3 blocks of 4: the last chunk is zero-padded
    let data: Vec<u8> = (1..=10).collect();
    tag.write_multiple_blocks(0, 3, &data).unwrap();

    let transport = tag.into_transport();
    let writes: Vec<&Vec<u8>> = transport
        .sent
        .iter()
        .filter(|f| f[1] == ISO15693_CMD_WRITE_SINGLE_BLOCK)
        .collect();
    assert_eq!(writes.len(), 3);
    assert_eq!(&writes[0][11..], &[1, 2, 3, 4]);
    assert_eq!(&writes[1][11..], &[5, 6, 7, 8]);
    assert_eq!(&writes[2][11..], &[9, 10, 0, 0]);
    // block numbers are consecutive from the first block
    assert_eq!(writes[0][10], 0);
    assert_eq!(writes[1][10], 1);
    assert_eq!(writes[2][10], 2);
}

#[test]
fn multi_block_write_truncates_excess_input() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::sysinfo_payload_memory(0x0F, 0x03));
    mock.push_response(vec![0x00]);

    let mut tag = tag_with(mock);
    tag.write_multiple_blocks(7, 1, &[0xAA; 100]).unwrap();

    let transport = tag.into_transport();
    let write = transport.sent.last().unwrap();
    assert_eq!(write[10], 7);
    assert_eq!(&write[11..], &[0xAA; 4]);
}

#[test]
fn abort_on_first_failed_block() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::sysinfo_payload_memory(0x0F, 0x03));
    mock.push_response(vec![0x00]); // block 4 ok
    mock.push_response(vec![0x01, 0x12]); // block 5: content locked
    // nothing queued for block 6: the loop must not reach it

    let mut tag = tag_with(mock);
    match tag.write_multiple_blocks(4, 3, &[0x55; 12]) {
        Err(Error::BlockStatus { block, code }) => {
            assert_eq!(block, 5);
            assert_eq!(code.as_u8(), 0x12);
        }
        other => panic!("expected BlockStatus, got {:?}", other),
    }

    // sysinfo + two writes only; block 4 stays written (no rollback)
    let transport = tag.into_transport();
    assert_eq!(transport.sent.len(), 3);
}

#[test]
fn missing_memory_geometry_fails_before_writing() {
    let mut mock = MockTransceive::new();
    let mut payload = vec![0x00, 0x00]; // no optional sysinfo fields
    payload.extend_from_slice(&common::fixtures::sample_uid_bytes());
    mock.push_response(payload);

    let mut tag = tag_with(mock);
    assert!(matches!(
        tag.write_multiple_blocks(0, 2, &[0u8; 8]),
        Err(Error::MissingMemoryInfo)
    ));
    // only the sysinfo request went out
    assert_eq!(tag.into_transport().sent.len(), 1);
}

#[test]
fn block_range_validated_before_any_exchange() {
    // 250 + 10 would run past block 255; nothing may be transmitted
    let mock = MockTransceive::new();
    let mut tag = tag_with(mock);
    match tag.write_multiple_blocks(250, 10, &[0u8; 40]) {
        Err(Error::BlockRange { first, count }) => {
            assert_eq!(first, 250);
            assert_eq!(count, 10);
        }
        other => panic!("expected BlockRange, got {:?}", other),
    }
    assert!(tag.into_transport().sent.is_empty());
}

#[test]
fn last_addressable_block_is_writable() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::sysinfo_payload_memory(0xFF, 0x03));
    mock.push_response(vec![0x00]);

    let mut tag = tag_with(mock);
    tag.write_multiple_blocks(255, 1, &[0x11; 4]).unwrap();

    let transport = tag.into_transport();
    assert_eq!(transport.sent.last().unwrap()[10], 255);
}

#[test]
fn sysinfo_error_fails_before_writing() {
    let mut mock = MockTransceive::new();
    mock.push_response(vec![0x01, 0x0F]);

    let mut tag = tag_with(mock);
    match tag.write_multiple_blocks(0, 1, &[0u8; 4]) {
        Err(Error::TagStatus(code)) => assert_eq!(code.as_u8(), 0x0F),
        other => panic!("expected TagStatus, got {:?}", other),
    }
}
