//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransceive setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::felica::frame::Frame;
use crate::transport::{MockTransceive, Transceive};
use crate::types::{Idm, Uid};

/// Build a MockTransceive pre-seeded with the given raw responses and
/// return it boxed as a Transceive trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transceive> {
    let mut mock = MockTransceive::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// The UID used by fixture responses throughout the test suite.
#[doc(hidden)]
pub fn fixture_uid() -> Uid {
    Uid::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x04, 0xE0])
}

/// The IDm used by FeliCa fixture responses throughout the test suite.
#[doc(hidden)]
pub fn fixture_idm() -> Idm {
    Idm::from_bytes([0x01, 0x2E, 0x4C, 0x86, 0x04, 0x2F, 0x7F, 0x33])
}

/// Build a Get System Information response advertising the given wire-form
/// memory geometry (zero-origin bytes) for [`fixture_uid`].
#[doc(hidden)]
pub fn sysinfo_response(number_of_blocks_wire: u8, block_size_wire: u8) -> Vec<u8> {
    let mut data = vec![0x00, 0x04];
    data.extend_from_slice(fixture_uid().as_bytes());
    data.extend_from_slice(&[number_of_blocks_wire, block_size_wire]);
    data
}

/// Build a successful write response (clear flags, no payload).
#[doc(hidden)]
pub fn write_ok_response() -> Vec<u8> {
    vec![0x00]
}

/// Build an error response carrying the given ISO15693 error code.
#[doc(hidden)]
pub fn error_response(code: u8) -> Vec<u8> {
    vec![0x01, code]
}

/// Wrap a FeliCa response payload in its NFC-F length-prefix frame.
#[doc(hidden)]
pub fn framed(payload: &[u8]) -> Vec<u8> {
    Frame::encode(payload).unwrap()
}

/// Build a framed ReadWithoutEncryption success response carrying the given
/// blocks for [`fixture_idm`].
#[doc(hidden)]
pub fn felica_read_response(blocks: &[[u8; 16]]) -> Vec<u8> {
    let mut payload = vec![0x07];
    payload.extend_from_slice(fixture_idm().as_bytes());
    payload.extend_from_slice(&[0x00, 0x00, blocks.len() as u8]);
    for b in blocks {
        payload.extend_from_slice(b);
    }
    framed(&payload)
}

/// Build a framed WriteWithoutEncryption response with the given status
/// flags for [`fixture_idm`].
#[doc(hidden)]
pub fn felica_write_response(status1: u8, status2: u8) -> Vec<u8> {
    let mut payload = vec![0x09];
    payload.extend_from_slice(fixture_idm().as_bytes());
    payload.extend_from_slice(&[status1, status2]);
    framed(&payload)
}
