// libnfctag-rs/libnfctag/src/iso15693/responses/inventory.rs

use crate::constants::ISO15693_INVENTORY_ENTRY_LEN;
use crate::iso15693::flags::ERROR_FLAG;
use crate::types::{ErrorCode, Uid};
use crate::{Error, Result, parser};

/// One inventory entry: DSFID(1) + UID(8), 9 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryEntry {
    pub dsfid: u8,
    pub uid: Uid,
}

impl InventoryEntry {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ISO15693_INVENTORY_ENTRY_LEN);
        buf.push(self.dsfid);
        buf.extend_from_slice(self.uid.as_bytes());
        buf
    }
}

/// Inventory response: flags byte followed by zero or more 9-byte entries.
///
/// The observed device convention never sets the error bit on inventory
/// responses, but that is unconfirmed, so the decoder guards it explicitly
/// instead of misparsing an error code as entry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryResponse {
    pub flags: u8,
    pub entries: Vec<InventoryEntry>,
}

impl InventoryResponse {
    /// Decode an inventory response. Entry count = `(len - 1) / 9`; a
    /// trailing partial entry is a length error rather than silent
    /// truncation.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let flags = parser::byte_at(data, 0)?;
        if flags & ERROR_FLAG != 0 {
            let code = parser::byte_at(data, 1)?;
            return Err(Error::TagStatus(ErrorCode::new(code)));
        }

        let body = &data[1..];
        if body.len() % ISO15693_INVENTORY_ENTRY_LEN != 0 {
            return Err(Error::InvalidLength {
                expected: 1 + (body.len() / ISO15693_INVENTORY_ENTRY_LEN + 1)
                    * ISO15693_INVENTORY_ENTRY_LEN,
                actual: data.len(),
            });
        }

        let count = body.len() / ISO15693_INVENTORY_ENTRY_LEN;
        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let offset = 1 + i * ISO15693_INVENTORY_ENTRY_LEN;
            let dsfid = parser::byte_at(data, offset)?;
            let uid = parser::uid_at(data, offset + 1)?;
            entries.push(InventoryEntry { dsfid, uid });
        }

        Ok(Self { flags, entries })
    }

    /// Emit the wire form: flags followed by each entry.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + self.entries.len() * ISO15693_INVENTORY_ENTRY_LEN);
        buf.push(self.flags);
        for e in &self.entries {
            buf.extend_from_slice(&e.encode());
        }
        buf
    }
}
