// libnfctag-rs/libnfctag/src/iso15693/commands/write.rs

use crate::constants::ISO15693_CMD_WRITE_SINGLE_BLOCK;
use crate::types::Uid;
use crate::{Result, parser};

/// Encode a Write Single Block request (command code 0x21).
/// Layout: flags(1) + cmd(1) + uid(8) + block_number(1) + data(n).
/// The data is appended verbatim: the codec neither pads nor truncates, so
/// callers must supply exactly block-size bytes.
pub fn encode_write_single(flags: u8, uid: Uid, block_number: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(11 + data.len());
    buf.push(flags);
    buf.push(ISO15693_CMD_WRITE_SINGLE_BLOCK);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(block_number);
    buf.extend_from_slice(data);
    buf
}

/// Decode a Write Single Block request frame back into its fields. The block
/// data is everything past the block number byte.
pub fn decode_write_single(data: &[u8]) -> Result<(u8, Uid, u8, Vec<u8>)> {
    parser::ensure_len(data, 11)?;
    let flags = data[0];
    let uid = parser::uid_at(data, 2)?;
    let block_number = data[10];
    Ok((flags, uid, block_number, data[11..].to_vec()))
}
