// libnfctag-rs/libnfctag/src/iso15693/responses/system.rs

use crate::iso15693::flags::{INFO_AFI, INFO_DSFID, INFO_MEMORY_SIZE};
use crate::iso15693::responses::ResponseHeader;
use crate::types::{MemorySizeInfo, Uid};
use crate::{Result, parser};

/// System information payload, fields gated by the info-flags byte.
///
/// The optional fields are not at fixed positions: each present field
/// shifts the ones after it, so decoding walks a running offset and
/// advances only for bits that are actually set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInformation {
    pub info_flags: u8,
    pub uid: Uid,
    /// Present iff info-flags bit 0 is set.
    pub dsfid: Option<u8>,
    /// Present iff info-flags bit 1 is set.
    pub afi: Option<u8>,
    /// Present iff info-flags bit 2 is set.
    pub memory_info: Option<MemorySizeInfo>,
}

impl SystemInformation {
    fn decode_at(data: &[u8], mut offset: usize) -> Result<Self> {
        let info_flags = parser::byte_at(data, offset)?;
        offset += 1;
        let uid = parser::uid_at(data, offset)?;
        offset += 8;

        let dsfid = if info_flags & INFO_DSFID != 0 {
            let b = parser::byte_at(data, offset)?;
            offset += 1;
            Some(b)
        } else {
            None
        };

        let afi = if info_flags & INFO_AFI != 0 {
            let b = parser::byte_at(data, offset)?;
            offset += 1;
            Some(b)
        } else {
            None
        };

        let memory_info = if info_flags & INFO_MEMORY_SIZE != 0 {
            let s = parser::slice_at(data, offset, 2)?;
            Some(MemorySizeInfo::from_bytes([s[0], s[1]]))
        } else {
            None
        };

        // INFO_IC_REFERENCE is recognized but its payload format is unused
        // by callers, so any trailing bytes are left unparsed.

        Ok(Self {
            info_flags,
            uid,
            dsfid,
            afi,
            memory_info,
        })
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.push(self.info_flags);
        buf.extend_from_slice(self.uid.as_bytes());
        if let Some(dsfid) = self.dsfid {
            buf.push(dsfid);
        }
        if let Some(afi) = self.afi {
            buf.push(afi);
        }
        if let Some(mem) = self.memory_info {
            buf.extend_from_slice(&mem.to_bytes());
        }
    }
}

/// Get System Information response.
/// Success layout: flags(1) + info_flags(1) + uid(8) + [dsfid]? + [afi]? +
/// [memory_size(2)]?.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInformationResponse {
    pub header: ResponseHeader,
    /// Present only when the error bit is clear.
    pub info: Option<SystemInformation>,
}

impl SystemInformationResponse {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let (header, offset) = ResponseHeader::parse(data)?;
        if header.has_error() {
            return Ok(Self { header, info: None });
        }
        let info = SystemInformation::decode_at(data, offset)?;
        Ok(Self {
            header,
            info: Some(info),
        })
    }

    pub fn has_error(&self) -> bool {
        self.header.has_error()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.header.encode();
        if let Some(info) = &self.info {
            info.encode_into(&mut buf);
        }
        buf
    }
}
