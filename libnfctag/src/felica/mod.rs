// libnfctag-rs/libnfctag/src/felica/mod.rs

//! FeliCa / FeliCa Lite block-access codec.
//!
//! Same design pattern as the ISO15693 codec with a smaller command set:
//! IDm-addressed Read/Write Without Encryption with two-byte status-flag
//! error reporting, framed with the NFC-F length prefix.

pub mod commands;
pub mod frame;
pub mod responses;

pub use commands::{Command, encode_read, encode_write};
pub use frame::Frame;
pub use responses::{decode_read, decode_write};
