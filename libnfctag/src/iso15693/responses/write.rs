// libnfctag-rs/libnfctag/src/iso15693/responses/write.rs

use crate::iso15693::responses::ResponseHeader;
use crate::Result;

/// Write response: just the header, no payload. Shared by Write Single
/// Block and each step of the emulated multi-block write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResponse {
    pub header: ResponseHeader,
}

impl WriteResponse {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let (header, _) = ResponseHeader::parse(data)?;
        Ok(Self { header })
    }

    pub fn has_error(&self) -> bool {
        self.header.has_error()
    }

    pub fn encode(&self) -> Vec<u8> {
        self.header.encode()
    }
}
