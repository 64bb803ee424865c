// libnfctag-rs/libnfctag/src/iso15693/commands/system.rs

use crate::constants::ISO15693_CMD_GET_SYSTEM_INFORMATION;
use crate::types::Uid;
use crate::{Result, parser};

/// Encode a Get System Information request (command code 0x2B).
/// Layout: flags(1) + cmd(1) + uid(8). Addressed mode only.
pub fn encode_system_information(flags: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    buf.push(flags);
    buf.push(ISO15693_CMD_GET_SYSTEM_INFORMATION);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Decode a Get System Information request frame back into its fields.
pub fn decode_system_information(data: &[u8]) -> Result<(u8, Uid)> {
    parser::ensure_len(data, 10)?;
    let flags = data[0];
    let uid = parser::uid_at(data, 2)?;
    Ok((flags, uid))
}
