// fixtures.rs — provides commonly used test payloads/frames

use libnfctag::felica::Frame;
use libnfctag::types::{Idm, Uid};

pub fn sample_uid_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x04, 0xE0]
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes())
}

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x2E, 0x4C, 0x86, 0x04, 0x2F, 0x7F, 0x33]
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

/// Get System Information success response: 16 blocks of 4 bytes,
/// DSFID and AFI present.
pub fn sysinfo_payload_full() -> Vec<u8> {
    let mut data = vec![0x00, 0x07]; // flags, info_flags = DSFID|AFI|MEM
    data.extend_from_slice(&sample_uid_bytes());
    data.push(0x1B); // dsfid
    data.push(0x55); // afi
    data.extend_from_slice(&[0x0F, 0x03]); // zero-origin: 16 blocks of 4
    data
}

/// Get System Information success response advertising only the memory
/// geometry (zero-origin wire bytes).
pub fn sysinfo_payload_memory(number_of_blocks_wire: u8, block_size_wire: u8) -> Vec<u8> {
    let mut data = vec![0x00, 0x04];
    data.extend_from_slice(&sample_uid_bytes());
    data.extend_from_slice(&[number_of_blocks_wire, block_size_wire]);
    data
}

/// Read Single Block success response with the given status and payload.
pub fn read_single_payload(security_status: u8, data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x00, security_status];
    out.extend_from_slice(data);
    out
}

/// Read Multiple Blocks success response: `blocks` chunks of
/// (status, block_size data bytes).
pub fn read_multiple_payload(blocks: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut out = vec![0x00];
    for (status, data) in blocks {
        out.push(*status);
        out.extend_from_slice(data);
    }
    out
}

/// Framed FeliCa ReadWithoutEncryption success response.
pub fn felica_read_frame(blocks: &[[u8; 16]]) -> Vec<u8> {
    let mut payload = vec![0x07];
    payload.extend_from_slice(&sample_idm_bytes());
    payload.extend_from_slice(&[0x00, 0x00, blocks.len() as u8]);
    for b in blocks {
        payload.extend_from_slice(b);
    }
    Frame::encode(&payload).unwrap()
}

/// Framed FeliCa WriteWithoutEncryption response with the given status.
pub fn felica_write_frame(status1: u8, status2: u8) -> Vec<u8> {
    let mut payload = vec![0x09];
    payload.extend_from_slice(&sample_idm_bytes());
    payload.extend_from_slice(&[status1, status2]);
    Frame::encode(&payload).unwrap()
}
