// libnfctag-rs/libnfctag/src/iso15693/commands/read.rs

use crate::constants::{ISO15693_CMD_READ_MULTIPLE_BLOCKS, ISO15693_CMD_READ_SINGLE_BLOCK};
use crate::types::Uid;
use crate::{Result, parser};

/// Encode a Read Single Block request (command code 0x20).
/// Layout: flags(1) + cmd(1) + uid(8) + block_number(1).
pub fn encode_read_single(flags: u8, uid: Uid, block_number: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(11);
    buf.push(flags);
    buf.push(ISO15693_CMD_READ_SINGLE_BLOCK);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(block_number);
    buf
}

/// Encode a Read Multiple Blocks request (command code 0x23).
/// Same layout as Read Single Block plus a trailing block count byte. The
/// count is transmitted exactly as supplied.
pub fn encode_read_multiple(flags: u8, uid: Uid, block_number: u8, number_of_blocks: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    buf.push(flags);
    buf.push(ISO15693_CMD_READ_MULTIPLE_BLOCKS);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(block_number);
    buf.push(number_of_blocks);
    buf
}

/// Decode a Read Single Block request frame back into its fields.
pub fn decode_read_single(data: &[u8]) -> Result<(u8, Uid, u8)> {
    parser::ensure_len(data, 11)?;
    let flags = data[0];
    let uid = parser::uid_at(data, 2)?;
    let block_number = data[10];
    Ok((flags, uid, block_number))
}

/// Decode a Read Multiple Blocks request frame back into its fields.
pub fn decode_read_multiple(data: &[u8]) -> Result<(u8, Uid, u8, u8)> {
    parser::ensure_len(data, 12)?;
    let flags = data[0];
    let uid = parser::uid_at(data, 2)?;
    let block_number = data[10];
    let number_of_blocks = data[11];
    Ok((flags, uid, block_number, number_of_blocks))
}
