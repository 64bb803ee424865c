// libnfctag-rs/libnfctag/src/error.rs

use crate::types::ErrorCode;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The tag left the field mid-conversation. Recoverable: callers may
    /// re-present the tag and retry the whole operation.
    #[error("tag lost during transceive")]
    TagLost,

    #[error("transport i/o error: {0}")]
    Io(String),

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// ISO15693 response carried the error bit and an error code.
    #[error("iso15693 tag error: {0}")]
    TagStatus(ErrorCode),
    /// Per-block failure raised by the emulated multi-block write.
    #[error("iso15693 tag error at block {block}: {code}")]
    BlockStatus { block: u8, code: ErrorCode },
    /// Requested block range does not fit the 8-bit block address space.
    #[error("block range starting at {first} with {count} blocks exceeds the 8-bit address space")]
    BlockRange { first: u8, count: u8 },

    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus { status1: u8, status2: u8 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("unknown command code: {0:#04x}")]
    UnknownCommand(u8),

    #[error("system information response carries no memory size info")]
    MissingMemoryInfo,

    #[error("frame format error: {0}")]
    FrameFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
