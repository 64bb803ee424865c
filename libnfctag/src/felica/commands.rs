// libnfctag-rs/libnfctag/src/felica/commands.rs

use crate::constants::{FELICA_CMD_READ_WITHOUT_ENCRYPTION, FELICA_CMD_WRITE_WITHOUT_ENCRYPTION};
use crate::types::{BlockElement, FelicaBlockData, Idm, ServiceCode};

/// High-level FeliCa command enum (block access subset).
#[derive(Debug, Clone)]
pub enum Command {
    ReadWithoutEncryption {
        idm: Idm,
        services: Vec<ServiceCode>,
        blocks: Vec<BlockElement>,
    },
    WriteWithoutEncryption {
        idm: Idm,
        service: ServiceCode,
        block: BlockElement,
        data: FelicaBlockData,
    },
}

impl Command {
    /// Return the FeliCa command code for this command.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::ReadWithoutEncryption { .. } => FELICA_CMD_READ_WITHOUT_ENCRYPTION,
            Self::WriteWithoutEncryption { .. } => FELICA_CMD_WRITE_WITHOUT_ENCRYPTION,
        }
    }

    /// Encode the command into the raw payload (command code + params),
    /// without the NFC-F length prefix.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadWithoutEncryption {
                idm,
                services,
                blocks,
            } => encode_read(*idm, services, blocks),
            Self::WriteWithoutEncryption {
                idm,
                service,
                block,
                data,
            } => encode_write(*idm, *service, *block, *data),
        }
    }
}

/// Encode ReadWithoutEncryption command payload (FeliCa command code 0x06)
pub fn encode_read(idm: Idm, services: &[ServiceCode], blocks: &[BlockElement]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(FELICA_CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(services.len() as u8);
    for svc in services {
        buf.extend_from_slice(&svc.to_le_bytes());
    }
    buf.push(blocks.len() as u8);
    for blk in blocks {
        buf.extend_from_slice(&blk.encode());
    }
    buf
}

/// Encode WriteWithoutEncryption command payload (FeliCa command code 0x08)
pub fn encode_write(
    idm: Idm,
    service: ServiceCode,
    block: BlockElement,
    data: FelicaBlockData,
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(FELICA_CMD_WRITE_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(1); // one service
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(1); // one block
    buf.extend_from_slice(&block.encode());
    buf.extend_from_slice(data.as_bytes());
    buf
}
