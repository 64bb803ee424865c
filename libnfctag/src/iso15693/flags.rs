// libnfctag-rs/libnfctag/src/iso15693/flags.rs
//! ISO15693 request-flag, info-flag and security-status bit constants.
//!
//! The request flags byte is a context-dependent bitfield, not an enum:
//! bits 4-7 change meaning depending on whether the inventory flag (bit 2)
//! is set. Constants are therefore grouped by context rather than modeled
//! as a single type.

// Bits 0-3, common to every request.
/// VICC double sub-carrier.
pub const SUBCARRIER_DOUBLE: u8 = 0x01;
/// High data rate.
pub const DATA_RATE_HIGH: u8 = 0x02;
/// Inventory flag: selects the inventory interpretation of bits 4-7.
pub const INVENTORY_FLAG: u8 = 0x04;
/// Protocol extension.
pub const PROTOCOL_EXTENSION: u8 = 0x08;

// Bits 4-7 when the inventory flag is clear (addressed commands).
/// Only the selected VICC answers.
pub const SELECT_ONLY: u8 = 0x10;
/// Addressed mode: the request carries a UID.
pub const ADDRESSED_MODE: u8 = 0x20;
/// Option bit, command-specific meaning.
pub const OPTION_COMMAND: u8 = 0x40;

// Bits 4-7 when the inventory flag is set.
/// AFI field is present in the inventory request.
pub const AFI_PRESENT: u8 = 0x10;
/// One time slot instead of sixteen.
pub const NB_SLOT_1: u8 = 0x20;

/// Response flags bit 0: error detected, an error code byte follows.
pub const ERROR_FLAG: u8 = 0x01;

/// Block security status bit 0: the block is locked.
pub const STATUS_LOCKED: u8 = 0x01;

// Get System Information info-flags: each bit gates an optional field.
/// DSFID byte present.
pub const INFO_DSFID: u8 = 0x01;
/// AFI byte present.
pub const INFO_AFI: u8 = 0x02;
/// 2-byte VICC memory size present.
pub const INFO_MEMORY_SIZE: u8 = 0x04;
/// IC reference present (recognized, payload not parsed).
pub const INFO_IC_REFERENCE: u8 = 0x08;
