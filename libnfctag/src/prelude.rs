// libnfctag-rs/libnfctag/src/prelude.rs

pub use crate::iso15693::commands::Request;
pub use crate::iso15693::responses::{
    InventoryEntry, InventoryResponse, ReadMultipleBlocksResponse, ReadSingleBlockResponse,
    ResponseHeader, SystemInformation, SystemInformationResponse, WriteResponse,
};
pub use crate::tag::{FelicaTag, Iso15693Tag};
pub use crate::transport::Transceive;
pub use crate::{
    AccessMode, BlockData, BlockElement, Error, ErrorCode, FelicaBlockData, Idm, MemorySizeInfo,
    Result, ServiceCode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
