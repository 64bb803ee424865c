// libnfctag-rs/libnfctag/src/iso15693/mod.rs

//! ISO15693 (NFC-V) request/response codec.
//!
//! Requests are a tagged enum ([`Request`]) with per-command encoders;
//! responses are per-command structs sharing a [`ResponseHeader`] whose
//! length depends on the error bit. All types are pure data transforms over
//! byte buffers; I/O lives behind [`crate::transport::Transceive`].

pub mod commands;
pub mod flags;
pub mod responses;

pub use commands::Request;
pub use responses::{
    InventoryEntry, InventoryResponse, ReadMultipleBlocksResponse, ReadSingleBlockResponse,
    ResponseHeader, SystemInformation, SystemInformationResponse, WriteResponse,
};
