// libnfctag-rs/libnfctag/src/constants.rs
//! Common protocol constants used across the crate

/// ISO15693 mandatory/optional command codes.
pub const ISO15693_CMD_INVENTORY: u8 = 0x01;
pub const ISO15693_CMD_STAY_QUIET: u8 = 0x02;
pub const ISO15693_CMD_READ_SINGLE_BLOCK: u8 = 0x20;
pub const ISO15693_CMD_WRITE_SINGLE_BLOCK: u8 = 0x21;
pub const ISO15693_CMD_LOCK_BLOCK: u8 = 0x22;
pub const ISO15693_CMD_READ_MULTIPLE_BLOCKS: u8 = 0x23;
/// Present for completeness of the command table. The wire command is never
/// issued: at least one target chip family (ICODE SLI) does not implement
/// it, so multi-block writes are emulated with a single-block loop.
pub const ISO15693_CMD_WRITE_MULTIPLE_BLOCKS: u8 = 0x24;
pub const ISO15693_CMD_SELECT: u8 = 0x25;
pub const ISO15693_CMD_RESET_TO_READY: u8 = 0x26;
pub const ISO15693_CMD_GET_SYSTEM_INFORMATION: u8 = 0x2B;

/// ISO15693 UID length in bytes.
pub const ISO15693_UID_LEN: usize = 8;

/// One inventory response entry: DSFID(1) + UID(8).
pub const ISO15693_INVENTORY_ENTRY_LEN: usize = 9;

/// FeliCa command / response codes (block access subset).
pub const FELICA_CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;
pub const FELICA_RESP_READ_WITHOUT_ENCRYPTION: u8 = 0x07;
pub const FELICA_CMD_WRITE_WITHOUT_ENCRYPTION: u8 = 0x08;
pub const FELICA_RESP_WRITE_WITHOUT_ENCRYPTION: u8 = 0x09;

/// FeliCa block length in bytes.
pub const FELICA_BLOCK_LEN: usize = 16;

/// NFC-F frames carry a leading length byte that counts the whole frame,
/// so the payload is limited to 254 bytes.
pub const FELICA_MAX_PAYLOAD_LEN: usize = 254;

/// Return a human-readable name for an ISO15693 command code.
pub fn iso15693_command_name(command: u8) -> &'static str {
    match command {
        ISO15693_CMD_INVENTORY => "Inventory",
        ISO15693_CMD_STAY_QUIET => "Stay Quiet",
        ISO15693_CMD_READ_SINGLE_BLOCK => "Read Single Block",
        ISO15693_CMD_WRITE_SINGLE_BLOCK => "Write Single Block",
        ISO15693_CMD_LOCK_BLOCK => "Lock Block",
        ISO15693_CMD_READ_MULTIPLE_BLOCKS => "Read Multiple Blocks",
        ISO15693_CMD_WRITE_MULTIPLE_BLOCKS => "Write Multiple Blocks",
        ISO15693_CMD_SELECT => "Select",
        ISO15693_CMD_RESET_TO_READY => "Reset to Ready",
        ISO15693_CMD_GET_SYSTEM_INFORMATION => "Get System Information",
        _ => "Unknown",
    }
}
