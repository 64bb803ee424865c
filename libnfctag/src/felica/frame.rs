// libnfctag-rs/libnfctag/src/felica/frame.rs

use crate::constants::FELICA_MAX_PAYLOAD_LEN;
use crate::{Error, Result};

/// NFC-F frame helper.
/// Format: [Len(1)] [Payload(n)] where Len counts the whole frame
/// including itself. The radio layer handles CRC, so unlike reader-side
/// USB framings there are no checksum bytes here.
pub struct Frame;

impl Frame {
    /// Prefix a command payload with its length byte.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > FELICA_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: FELICA_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        let mut out = Vec::with_capacity(1 + payload.len());
        out.push((payload.len() + 1) as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Strip and validate the length byte, returning the payload.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.is_empty() {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        let len = frame[0] as usize;
        if len != frame.len() {
            return Err(Error::FrameFormat(format!(
                "length byte {} does not match frame length {}",
                len,
                frame.len()
            )));
        }
        Ok(frame[1..].to_vec())
    }
}
