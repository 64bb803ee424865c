#[path = "../common/mod.rs"]
mod common;

use libnfctag::iso15693::responses::{
    InventoryResponse, ReadMultipleBlocksResponse, ReadSingleBlockResponse,
};
use libnfctag::Error;
use proptest::prelude::*;

#[test]
fn inventory_decodes_entries() {
    let mut data = vec![0x00];
    data.push(0x1B);
    data.extend_from_slice(&common::fixtures::sample_uid_bytes());

    let resp = InventoryResponse::decode(&data).unwrap();
    assert_eq!(resp.entries.len(), 1);
    assert_eq!(resp.entries[0].dsfid, 0x1B);
    assert_eq!(resp.entries[0].uid, common::fixtures::sample_uid());
}

#[test]
fn inventory_error_bit_is_refused() {
    match InventoryResponse::decode(&[0x01, 0x02]) {
        Err(Error::TagStatus(code)) => assert_eq!(code.as_u8(), 0x02),
        other => panic!("expected TagStatus, got {:?}", other),
    }
}

#[test]
fn read_single_separates_status_and_data() {
    let payload = common::fixtures::read_single_payload(0x01, &[0xDE, 0xAD, 0xBE, 0xEF]);
    let resp = ReadSingleBlockResponse::decode(&payload).unwrap();
    let block = resp.block.unwrap();
    assert!(block.is_locked());
    assert_eq!(block.data(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn read_single_error_consumes_exactly_two_bytes() {
    let resp = ReadSingleBlockResponse::decode(&[0x01, 0x10]).unwrap();
    assert!(resp.has_error());
    assert_eq!(resp.header.error_code().unwrap().as_u8(), 0x10);
    assert!(resp.block.is_none());
}

#[test]
fn read_multiple_chunks_with_out_of_band_geometry() {
    let blocks: Vec<(u8, Vec<u8>)> = (1..=3u8).map(|i| (0x00, vec![i; 4])).collect();
    let payload = common::fixtures::read_multiple_payload(&blocks);

    let resp = ReadMultipleBlocksResponse::decode(&payload, 4, 3).unwrap();
    assert_eq!(resp.blocks.len(), 3);
    assert_eq!(resp.blocks[0].data(), &[1; 4]);
    assert_eq!(resp.blocks[2].data(), &[3; 4]);
}

#[test]
fn read_multiple_rejects_truncated_payload() {
    let blocks: Vec<(u8, Vec<u8>)> = (1..=2u8).map(|i| (0x00, vec![i; 4])).collect();
    let payload = common::fixtures::read_multiple_payload(&blocks);
    assert!(matches!(
        ReadMultipleBlocksResponse::decode(&payload, 4, 3),
        Err(Error::InvalidLength { .. })
    ));
}

proptest! {
    // Response decoders never panic on arbitrary input.
    #[test]
    fn inventory_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = InventoryResponse::decode(&data);
    }

    #[test]
    fn read_single_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = ReadSingleBlockResponse::decode(&data);
    }

    #[test]
    fn read_multiple_decode_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..64),
        block_size in 1u8..=32,
        count in 0u8..=8,
    ) {
        let _ = ReadMultipleBlocksResponse::decode(&data, block_size, count);
    }
}
