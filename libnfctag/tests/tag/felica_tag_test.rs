#[path = "../common/mod.rs"]
mod common;

use libnfctag::tag::FelicaTag;
use libnfctag::transport::MockTransceive;
use libnfctag::types::{AccessMode, BlockElement, FelicaBlockData, ServiceCode};
use libnfctag::Error;

fn tag_with(mock: MockTransceive) -> FelicaTag<MockTransceive> {
    FelicaTag::new(mock, common::fixtures::sample_idm())
}

#[test]
fn read_without_encryption_multiple_blocks() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::felica_read_frame(&[
        [0x01; 16],
        [0x02; 16],
    ]));

    let mut tag = tag_with(mock);
    let services = [ServiceCode::FELICA_LITE_RO];
    let blocks = [
        BlockElement::new(0, AccessMode::DirectAccessOrRead, 0),
        BlockElement::new(0, AccessMode::DirectAccessOrRead, 1),
    ];
    let data = tag.read_without_encryption(&services, &blocks).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].as_bytes(), &[0x01; 16]);

    // request frame: length byte counts the whole frame
    let sent = tag.into_transport().pop_sent().unwrap();
    assert_eq!(sent[0] as usize, sent.len());
    assert_eq!(sent[1], 0x06);
}

#[test]
fn lite_write_block_uses_rw_service() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::felica_write_frame(0x00, 0x00));

    let mut tag = tag_with(mock);
    tag.write_block(2, FelicaBlockData::from_bytes([0x77; 16]))
        .unwrap();

    let sent = tag.into_transport().pop_sent().unwrap();
    assert_eq!(sent[1], 0x08);
    assert_eq!(&sent[11..13], &ServiceCode::FELICA_LITE_RW.to_le_bytes());
    assert_eq!(&sent[sent.len() - 16..], &[0x77; 16]);
}

#[test]
fn nonzero_status_becomes_error() {
    let mut mock = MockTransceive::new();
    mock.push_response(common::fixtures::felica_write_frame(0x01, 0xA6));

    let mut tag = tag_with(mock);
    let err = tag
        .write_block(0, FelicaBlockData::from_bytes([0; 16]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::FelicaStatus {
            status1: 0x01,
            status2: 0xA6
        }
    ));
}

#[test]
fn lost_tag_maps_to_tag_lost() {
    let mut mock = MockTransceive::new();
    mock.push_tag_lost();
    let mut tag = tag_with(mock);
    assert!(matches!(tag.read_block(0), Err(Error::TagLost)));
}
