// libnfctag-rs/libnfctag/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// ISO15693 UID - Newtype Pattern (8 バイト)
///
/// Layout: 6-byte IC manufacturer serial number, 1-byte IC manufacturer
/// code, 1-byte EOF marker (0xE0 on conforming tags, not validated here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 8]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// 6-byte IC manufacturer serial number.
    pub fn serial_number(&self) -> &[u8] {
        &self.0[0..6]
    }

    /// IC manufacturer code byte.
    pub fn mfg_code(&self) -> u8 {
        self.0[6]
    }

    /// Trailing EOF marker byte.
    pub fn eof(&self) -> u8 {
        self.0[7]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// VICC memory geometry from Get System Information.
///
/// Both fields are zero-origin on the wire and one-origin here, so they are
/// always >= 1 after a successful decode. The block size occupies only the
/// low 5 bits of its wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySizeInfo {
    number_of_blocks: u16,
    block_size: u8,
}

impl MemorySizeInfo {
    /// Decode the 2-byte wire form, adding 1 to each zero-origin field.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            number_of_blocks: u16::from(bytes[0]) + 1,
            block_size: (bytes[1] & 0x1F) + 1,
        }
    }

    /// Encode back to the zero-origin wire form.
    pub fn to_bytes(&self) -> [u8; 2] {
        [(self.number_of_blocks - 1) as u8, self.block_size - 1]
    }

    /// Number of blocks on the tag (1..=256).
    pub fn number_of_blocks(&self) -> u16 {
        self.number_of_blocks
    }

    /// Bytes per block (1..=32).
    pub fn block_size(&self) -> u8 {
        self.block_size
    }
}

/// One block of an ISO15693 read response: a security-status byte followed
/// by the block payload. The payload length equals the tag's block size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData {
    security_status: u8,
    data: Vec<u8>,
}

impl BlockData {
    pub fn new(security_status: u8, data: Vec<u8>) -> Self {
        Self {
            security_status,
            data,
        }
    }

    pub fn security_status(&self) -> u8 {
        self.security_status
    }

    /// Bit 0 of the security status marks the block as locked.
    pub fn is_locked(&self) -> bool {
        self.security_status & crate::iso15693::flags::STATUS_LOCKED != 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.data)
    }
}

/// ISO15693 error code with the fixed message table from the standard.
/// 0x00 means success; everything else is a specific failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCode(u8);

impl ErrorCode {
    pub const NO_ERROR: Self = Self(0x00);
    pub const COMMAND_NOT_SUPPORTED: Self = Self(0x01);
    pub const COMMAND_NOT_RECOGNISED: Self = Self(0x02);
    pub const OPTION_NOT_SUPPORTED: Self = Self(0x03);
    pub const UNKNOWN_ERROR: Self = Self(0x0F);
    pub const BLOCK_NOT_AVAILABLE: Self = Self(0x10);
    pub const BLOCK_ALREADY_LOCKED: Self = Self(0x11);
    pub const BLOCK_CONTENT_LOCKED: Self = Self(0x12);
    pub const BLOCK_NOT_PROGRAMMED: Self = Self(0x13);
    pub const BLOCK_NOT_LOCKED: Self = Self(0x14);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        self.0 == 0x00
    }

    /// Human-readable message for the code.
    pub fn message(&self) -> &'static str {
        match *self {
            Self::NO_ERROR => "no error",
            Self::COMMAND_NOT_SUPPORTED => "the command is not supported",
            Self::COMMAND_NOT_RECOGNISED => "the command is not recognised",
            Self::OPTION_NOT_SUPPORTED => "the option is not supported",
            Self::UNKNOWN_ERROR => "unknown error",
            Self::BLOCK_NOT_AVAILABLE => "the specified block is not available",
            Self::BLOCK_ALREADY_LOCKED => {
                "the specified block is already locked and cannot be locked again"
            }
            Self::BLOCK_CONTENT_LOCKED => {
                "the specified block is locked and its content cannot be changed"
            }
            Self::BLOCK_NOT_PROGRAMMED => "the specified block was not successfully programmed",
            Self::BLOCK_NOT_LOCKED => "the specified block was not successfully locked",
            _ => "reserved or custom error code",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}: {}", self.0, self.message())
    }
}

/// FeliCa IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// FeliCa ServiceCode (u16, little-endian on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// FeliCa Lite read/write service.
    pub const FELICA_LITE_RW: Self = Self(0x0009);
    /// FeliCa Lite read-only service.
    pub const FELICA_LITE_RO: Self = Self(0x000B);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

/// FeliCa block payload (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FelicaBlockData([u8; 16]);

impl FelicaBlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

/// FeliCa AccessMode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    CashBackOrDecrement = 0,
    DirectAccessOrDecrement = 1,
    DirectAccessOrRead = 2,
}

/// FeliCa block list element.
///
/// Byte 0 packs the length bit (b7, set for the short form), the 3-bit
/// access mode (b6-b4) and the 4-bit service code list order (b3-b0),
/// followed by the block number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockElement {
    pub service_index: u8,
    pub access_mode: AccessMode,
    pub block_number: u16,
}

impl BlockElement {
    pub fn new(service_index: u8, access_mode: AccessMode, block_number: u16) -> Self {
        Self {
            service_index,
            access_mode,
            block_number,
        }
    }

    /// FeliCa のブロック要素をエンコードする。
    /// Block numbers below 256 use the 2-byte short form; larger ones the
    /// 3-byte form with the block number little-endian.
    pub fn encode(&self) -> Vec<u8> {
        let header = ((self.access_mode as u8) << 4) | (self.service_index & 0x0F);
        if self.block_number < 0x100 {
            vec![0x80 | header, self.block_number as u8]
        } else {
            let [lo, hi] = self.block_number.to_le_bytes();
            vec![header, lo, hi]
        }
    }
}
