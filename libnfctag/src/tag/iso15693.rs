// libnfctag-rs/libnfctag/src/tag/iso15693.rs

use log::{debug, trace, warn};

use crate::iso15693::commands::Request;
use crate::iso15693::flags::{
    ADDRESSED_MODE, DATA_RATE_HIGH, INVENTORY_FLAG, NB_SLOT_1, OPTION_COMMAND,
};
use crate::iso15693::responses::{
    InventoryResponse, ReadMultipleBlocksResponse, ReadSingleBlockResponse, ResponseHeader,
    SystemInformationResponse, WriteResponse,
};
use crate::transport::Transceive;
use crate::types::Uid;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// An ISO15693 (NFC-V) tag bound to a transceive transport.
///
/// Each method is one request/transceive/decode cycle; there is no state
/// machine across calls. The only ordering dependency is that
/// [`system_information`](Self::system_information) must precede
/// [`read_multiple_blocks`](Self::read_multiple_blocks) to learn the block
/// size, since read responses do not self-describe their chunking.
pub struct Iso15693Tag<T: Transceive> {
    transport: T,
    uid: Uid,
    dsfid: u8,
}

impl<T: Transceive> Iso15693Tag<T> {
    pub fn new(transport: T, uid: Uid, dsfid: u8) -> Self {
        Self {
            transport,
            uid,
            dsfid,
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn dsfid(&self) -> u8 {
        self.dsfid
    }

    /// Consume the tag, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn execute(&mut self, request: &Request) -> Result<Vec<u8>> {
        let raw = request.encode();
        trace!("iso15693 tx: [{}]", bytes_to_hex_spaced(&raw));
        match self.transport.transceive(&raw)? {
            Some(resp) => {
                trace!("iso15693 rx: [{}]", bytes_to_hex_spaced(&resp));
                Ok(resp)
            }
            None => {
                debug!(
                    "tag lost during {:#04x} exchange",
                    request.command_code()
                );
                Err(Error::TagLost)
            }
        }
    }

    /// Inventory the tags in the field (one time slot, no AFI filter).
    pub fn inventory(&mut self) -> Result<InventoryResponse> {
        let req = Request::Inventory {
            flags: DATA_RATE_HIGH | INVENTORY_FLAG | NB_SLOT_1,
            afi: 0x00,
            mask_length: 0x00,
            mask_value: [0u8; 8],
        };
        let resp = self.execute(&req)?;
        InventoryResponse::decode(&resp)
    }

    /// Read one block in addressed mode.
    pub fn read_single_block(&mut self, block_number: u8) -> Result<ReadSingleBlockResponse> {
        let req = Request::ReadSingleBlock {
            flags: DATA_RATE_HIGH | ADDRESSED_MODE,
            uid: self.uid,
            block_number,
        };
        let resp = self.execute(&req)?;
        ReadSingleBlockResponse::decode(&resp)
    }

    /// Read `number_of_blocks` consecutive blocks starting at
    /// `block_number`. `block_size` comes from a preceding
    /// [`system_information`](Self::system_information) call; the response
    /// cannot be chunked without it.
    pub fn read_multiple_blocks(
        &mut self,
        block_number: u8,
        block_size: u8,
        number_of_blocks: u8,
    ) -> Result<ReadMultipleBlocksResponse> {
        let req = Request::ReadMultipleBlocks {
            flags: DATA_RATE_HIGH | ADDRESSED_MODE | OPTION_COMMAND,
            uid: self.uid,
            block_number,
            number_of_blocks,
        };
        let resp = self.execute(&req)?;
        ReadMultipleBlocksResponse::decode(&resp, block_size, number_of_blocks)
    }

    /// Write one block in addressed mode. `data` is sent verbatim; callers
    /// must supply exactly block-size bytes.
    pub fn write_single_block(&mut self, block_number: u8, data: &[u8]) -> Result<WriteResponse> {
        let req = Request::WriteSingleBlock {
            flags: DATA_RATE_HIGH | ADDRESSED_MODE,
            uid: self.uid,
            block_number,
            data: data.to_vec(),
        };
        let resp = self.execute(&req)?;
        WriteResponse::decode(&resp)
    }

    /// Write `number_of_blocks` consecutive blocks starting at
    /// `first_block_number`, emulated as a single-block loop because the
    /// Write Multiple Blocks wire command is unsupported by the ICODE SLI
    /// chip family.
    ///
    /// The block size is obtained from Get System Information. `data` is
    /// copied into a zero-filled buffer of `number_of_blocks × block_size`
    /// bytes, so short input is zero-padded and excess input is truncated.
    ///
    /// The range must fit the 8-bit block address space:
    /// `first_block_number + number_of_blocks <= 256`, checked before any
    /// frame goes out.
    ///
    /// NOT atomic: the loop aborts at the first block whose response
    /// carries the error bit, returning [`Error::BlockStatus`] for that
    /// block. Blocks already written are not rolled back, so a failed call
    /// may leave a partial write on the tag.
    pub fn write_multiple_blocks(
        &mut self,
        first_block_number: u8,
        number_of_blocks: u8,
        data: &[u8],
    ) -> Result<WriteResponse> {
        if u16::from(first_block_number) + u16::from(number_of_blocks) > 0x100 {
            return Err(Error::BlockRange {
                first: first_block_number,
                count: number_of_blocks,
            });
        }
        let sysinfo = self.system_information()?;
        if let Some(code) = sysinfo.header.error_code() {
            return Err(Error::TagStatus(code));
        }
        let mem = sysinfo
            .info
            .and_then(|info| info.memory_info)
            .ok_or(Error::MissingMemoryInfo)?;

        let block_size = mem.block_size() as usize;
        let total = number_of_blocks as usize * block_size;
        let mut buf = vec![0u8; total];
        let copied = data.len().min(total);
        buf[..copied].copy_from_slice(&data[..copied]);

        let mut last = WriteResponse {
            header: ResponseHeader::from_flags(0x00),
        };
        for (i, chunk) in buf.chunks(block_size).enumerate() {
            let block = first_block_number + i as u8;
            let resp = self.write_single_block(block, chunk)?;
            if let Some(code) = resp.header.error_code() {
                warn!(
                    "multi-block write aborted at block {} ({}); earlier blocks are not rolled back",
                    block, code
                );
                return Err(Error::BlockStatus { block, code });
            }
            last = resp;
        }
        Ok(last)
    }

    /// Query the tag's system information (DSFID, AFI, memory geometry).
    pub fn system_information(&mut self) -> Result<SystemInformationResponse> {
        let req = Request::GetSystemInformation {
            flags: DATA_RATE_HIGH | ADDRESSED_MODE,
            uid: self.uid,
        };
        let resp = self.execute(&req)?;
        SystemInformationResponse::decode(&resp)
    }
}
