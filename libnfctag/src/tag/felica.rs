// libnfctag-rs/libnfctag/src/tag/felica.rs

use log::{debug, trace};

use crate::felica::commands::Command;
use crate::felica::frame::Frame;
use crate::felica::responses::{decode_read, decode_write};
use crate::transport::Transceive;
use crate::types::{AccessMode, BlockElement, FelicaBlockData, Idm, ServiceCode};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// A FeliCa tag bound to a transceive transport, addressed by its IDm.
///
/// Only the unencrypted block-access commands are implemented. The
/// `read_block` / `write_block` helpers cover the common FeliCa Lite case
/// of a single block on the well-known Lite services.
pub struct FelicaTag<T: Transceive> {
    transport: T,
    idm: Idm,
}

impl<T: Transceive> FelicaTag<T> {
    pub fn new(transport: T, idm: Idm) -> Self {
        Self { transport, idm }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// Consume the tag, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn execute(&mut self, command: &Command) -> Result<Vec<u8>> {
        let frame = Frame::encode(&command.encode())?;
        trace!("felica tx: [{}]", bytes_to_hex_spaced(&frame));
        match self.transport.transceive(&frame)? {
            Some(resp) => {
                trace!("felica rx: [{}]", bytes_to_hex_spaced(&resp));
                Frame::decode(&resp)
            }
            None => {
                debug!("tag lost during {:#04x} exchange", command.command_code());
                Err(Error::TagLost)
            }
        }
    }

    /// Read With No Encryption across arbitrary services and block
    /// elements. Returns the blocks in request order.
    pub fn read_without_encryption(
        &mut self,
        services: &[ServiceCode],
        blocks: &[BlockElement],
    ) -> Result<Vec<FelicaBlockData>> {
        let cmd = Command::ReadWithoutEncryption {
            idm: self.idm,
            services: services.to_vec(),
            blocks: blocks.to_vec(),
        };
        let payload = self.execute(&cmd)?;
        let (_, data) = decode_read(&payload)?;
        Ok(data)
    }

    /// Write With No Encryption of one block.
    pub fn write_without_encryption(
        &mut self,
        service: ServiceCode,
        block: BlockElement,
        data: FelicaBlockData,
    ) -> Result<()> {
        let cmd = Command::WriteWithoutEncryption {
            idm: self.idm,
            service,
            block,
            data,
        };
        let payload = self.execute(&cmd)?;
        decode_write(&payload)?;
        Ok(())
    }

    /// Read one block from the FeliCa Lite read-only service.
    pub fn read_block(&mut self, block_number: u16) -> Result<FelicaBlockData> {
        let services = [ServiceCode::FELICA_LITE_RO];
        let blocks = [BlockElement::new(
            0,
            AccessMode::DirectAccessOrRead,
            block_number,
        )];
        let mut data = self.read_without_encryption(&services, &blocks)?;
        data.pop().ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })
    }

    /// Write one block through the FeliCa Lite read/write service.
    pub fn write_block(&mut self, block_number: u16, data: FelicaBlockData) -> Result<()> {
        let block = BlockElement::new(0, AccessMode::DirectAccessOrRead, block_number);
        self.write_without_encryption(ServiceCode::FELICA_LITE_RW, block, data)
    }
}
