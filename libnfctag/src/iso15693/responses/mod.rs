// libnfctag-rs/libnfctag/src/iso15693/responses/mod.rs

pub mod inventory;
pub mod read;
pub mod system;
pub mod write;

pub use inventory::{InventoryEntry, InventoryResponse};
pub use read::{ReadMultipleBlocksResponse, ReadSingleBlockResponse};
pub use system::{SystemInformation, SystemInformationResponse};
pub use write::WriteResponse;

use crate::iso15693::flags::ERROR_FLAG;
use crate::types::ErrorCode;
use crate::{Result, parser};

/// Shared response frame header: a flags byte, followed by an error code
/// byte only when bit 0 of flags is set.
///
/// This conditional-length header is the central parsing subtlety of the
/// ISO15693 response format: every response decoder must parse the header
/// first and branch on `has_error()` before reading any later field, since
/// field offsets shift by one depending on the error bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    flags: u8,
    error: Option<ErrorCode>,
}

impl ResponseHeader {
    /// Parse the header from the start of a response frame. Returns the
    /// header and the number of bytes it consumed (1, or 2 with the error
    /// code).
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let flags = parser::byte_at(data, 0)?;
        if flags & ERROR_FLAG != 0 {
            let code = parser::byte_at(data, 1)?;
            Ok((
                Self {
                    flags,
                    error: Some(ErrorCode::new(code)),
                },
                2,
            ))
        } else {
            Ok((Self { flags, error: None }, 1))
        }
    }

    /// Build a success header from a flags byte (error bit must be clear).
    pub fn from_flags(flags: u8) -> Self {
        debug_assert_eq!(flags & ERROR_FLAG, 0);
        Self { flags, error: None }
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// True when the response carried the error bit.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The error code, when the error bit was set.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error
    }

    /// Emit the wire form of the header alone.
    pub fn encode(&self) -> Vec<u8> {
        match self.error {
            Some(code) => vec![self.flags, code.as_u8()],
            None => vec![self.flags],
        }
    }
}
