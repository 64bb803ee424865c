// libnfctag-rs/libnfctag/src/iso15693/responses/read.rs

use crate::iso15693::responses::ResponseHeader;
use crate::types::BlockData;
use crate::{Result, parser};

/// Read Single Block response.
/// Success layout: flags(1) + security_status(1) + data(block_size).
/// Error layout: flags(1) + error_code(1), no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadSingleBlockResponse {
    pub header: ResponseHeader,
    /// Present only when the error bit is clear.
    pub block: Option<BlockData>,
}

impl ReadSingleBlockResponse {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let (header, offset) = ResponseHeader::parse(data)?;
        if header.has_error() {
            return Ok(Self {
                header,
                block: None,
            });
        }

        let security_status = parser::byte_at(data, offset)?;
        let block_data = data[offset + 1..].to_vec();
        Ok(Self {
            header,
            block: Some(BlockData::new(security_status, block_data)),
        })
    }

    pub fn has_error(&self) -> bool {
        self.header.has_error()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.header.encode();
        if let Some(block) = &self.block {
            buf.push(block.security_status());
            buf.extend_from_slice(block.data());
        }
        buf
    }
}

/// Read Multiple Blocks response.
///
/// Success layout: flags(1) + (security_status(1) + data(block_size)) × n.
/// The wire format does not self-describe the chunk boundaries, so
/// `block_size` and `number_of_blocks` are supplied out of band from a
/// preceding Get System Information exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMultipleBlocksResponse {
    pub header: ResponseHeader,
    /// Empty when the error bit is set.
    pub blocks: Vec<BlockData>,
}

impl ReadMultipleBlocksResponse {
    pub fn decode(data: &[u8], block_size: u8, number_of_blocks: u8) -> Result<Self> {
        let (header, offset) = ResponseHeader::parse(data)?;
        if header.has_error() {
            return Ok(Self {
                header,
                blocks: Vec::new(),
            });
        }

        let chunk_len = 1 + block_size as usize;
        let count = number_of_blocks as usize;
        parser::ensure_len(data, offset + count * chunk_len)?;

        let mut blocks = Vec::with_capacity(count);
        for i in 0..count {
            let start = offset + i * chunk_len;
            let security_status = data[start];
            let block_data = data[start + 1..start + chunk_len].to_vec();
            blocks.push(BlockData::new(security_status, block_data));
        }

        Ok(Self { header, blocks })
    }

    pub fn has_error(&self) -> bool {
        self.header.has_error()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.header.encode();
        for block in &self.blocks {
            buf.push(block.security_status());
            buf.extend_from_slice(block.data());
        }
        buf
    }
}
