// libnfctag-rs/libnfctag/src/iso15693/commands/mod.rs

pub mod inventory;
pub mod read;
pub mod system;
pub mod write;

pub use inventory::{decode_inventory, encode_inventory};
pub use read::{decode_read_multiple, decode_read_single, encode_read_multiple, encode_read_single};
pub use system::{decode_system_information, encode_system_information};
pub use write::{decode_write_single, encode_write_single};

use crate::constants::{
    ISO15693_CMD_GET_SYSTEM_INFORMATION, ISO15693_CMD_INVENTORY, ISO15693_CMD_READ_MULTIPLE_BLOCKS,
    ISO15693_CMD_READ_SINGLE_BLOCK, ISO15693_CMD_WRITE_SINGLE_BLOCK,
};
use crate::types::Uid;
use crate::{Error, Result, parser};

/// High-level ISO15693 request enum. One variant per supported command;
/// per-command encoders live in `iso15693::commands::<name>.rs`.
///
/// There is deliberately no `WriteMultipleBlocks` variant: the wire command
/// (0x24) is unsupported by the ICODE SLI family, so multi-block writes are
/// emulated as a single-block loop in the tag layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Inventory {
        flags: u8,
        afi: u8,
        mask_length: u8,
        /// Always transmitted as 8 bytes; the tail beyond `mask_length`
        /// bits is zero.
        mask_value: [u8; 8],
    },
    ReadSingleBlock {
        flags: u8,
        uid: Uid,
        block_number: u8,
    },
    ReadMultipleBlocks {
        flags: u8,
        uid: Uid,
        block_number: u8,
        number_of_blocks: u8,
    },
    WriteSingleBlock {
        flags: u8,
        uid: Uid,
        block_number: u8,
        /// Written verbatim; callers supply exactly block-size bytes.
        data: Vec<u8>,
    },
    GetSystemInformation {
        flags: u8,
        uid: Uid,
    },
}

impl Request {
    /// Return the command code as defined by the ISO15693 standard.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Inventory { .. } => ISO15693_CMD_INVENTORY,
            Self::ReadSingleBlock { .. } => ISO15693_CMD_READ_SINGLE_BLOCK,
            Self::ReadMultipleBlocks { .. } => ISO15693_CMD_READ_MULTIPLE_BLOCKS,
            Self::WriteSingleBlock { .. } => ISO15693_CMD_WRITE_SINGLE_BLOCK,
            Self::GetSystemInformation { .. } => ISO15693_CMD_GET_SYSTEM_INFORMATION,
        }
    }

    /// Encode the request into the raw frame: `[flags, command, ...fields]`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Inventory {
                flags,
                afi,
                mask_length,
                mask_value,
            } => encode_inventory(*flags, *afi, *mask_length, mask_value),
            Self::ReadSingleBlock {
                flags,
                uid,
                block_number,
            } => encode_read_single(*flags, *uid, *block_number),
            Self::ReadMultipleBlocks {
                flags,
                uid,
                block_number,
                number_of_blocks,
            } => encode_read_multiple(*flags, *uid, *block_number, *number_of_blocks),
            Self::WriteSingleBlock {
                flags,
                uid,
                block_number,
                data,
            } => encode_write_single(*flags, *uid, *block_number, data),
            Self::GetSystemInformation { flags, uid } => encode_system_information(*flags, *uid),
        }
    }

    /// Decode a raw request frame back into a typed request, dispatching on
    /// the command byte.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let command = parser::byte_at(data, 1)?;
        match command {
            ISO15693_CMD_INVENTORY => {
                let (flags, afi, mask_length, mask_value) = decode_inventory(data)?;
                Ok(Self::Inventory {
                    flags,
                    afi,
                    mask_length,
                    mask_value,
                })
            }
            ISO15693_CMD_READ_SINGLE_BLOCK => {
                let (flags, uid, block_number) = decode_read_single(data)?;
                Ok(Self::ReadSingleBlock {
                    flags,
                    uid,
                    block_number,
                })
            }
            ISO15693_CMD_READ_MULTIPLE_BLOCKS => {
                let (flags, uid, block_number, number_of_blocks) = decode_read_multiple(data)?;
                Ok(Self::ReadMultipleBlocks {
                    flags,
                    uid,
                    block_number,
                    number_of_blocks,
                })
            }
            ISO15693_CMD_WRITE_SINGLE_BLOCK => {
                let (flags, uid, block_number, data) = decode_write_single(data)?;
                Ok(Self::WriteSingleBlock {
                    flags,
                    uid,
                    block_number,
                    data,
                })
            }
            ISO15693_CMD_GET_SYSTEM_INFORMATION => {
                let (flags, uid) = decode_system_information(data)?;
                Ok(Self::GetSystemInformation { flags, uid })
            }
            other => Err(Error::UnknownCommand(other)),
        }
    }
}
