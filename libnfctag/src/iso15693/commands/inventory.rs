// libnfctag-rs/libnfctag/src/iso15693/commands/inventory.rs

use crate::constants::ISO15693_CMD_INVENTORY;
use crate::{Result, parser};

/// Encode an Inventory request (command code 0x01).
/// Layout: flags(1) + cmd(1) + AFI(1) + mask_length(1) + mask_value(8).
/// The mask field is fixed at 8 bytes even when `mask_length` covers fewer
/// bits; the unused tail stays zero.
pub fn encode_inventory(flags: u8, afi: u8, mask_length: u8, mask_value: &[u8; 8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    buf.push(flags);
    buf.push(ISO15693_CMD_INVENTORY);
    buf.push(afi);
    buf.push(mask_length);
    buf.extend_from_slice(mask_value);
    buf
}

/// Decode an Inventory request frame back into its fields.
pub fn decode_inventory(data: &[u8]) -> Result<(u8, u8, u8, [u8; 8])> {
    parser::ensure_len(data, 12)?;
    let flags = data[0];
    let afi = data[2];
    let mask_length = data[3];
    let mut mask_value = [0u8; 8];
    mask_value.copy_from_slice(parser::slice_at(data, 4, 8)?);
    Ok((flags, afi, mask_length, mask_value))
}
