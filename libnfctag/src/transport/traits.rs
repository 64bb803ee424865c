// libnfctag-rs/libnfctag/src/transport/traits.rs

use crate::Result;

/// Transceive trait abstracts the NFC radio away from codec and tag logic.
///
/// One call is one request/response exchange with the tag currently in the
/// field. The transport owns timeouts and session exclusivity; the codec
/// has no notion of time.
pub trait Transceive {
    /// Send a raw request frame and wait for the tag's response.
    ///
    /// Returns `Ok(Some(bytes))` with the raw response, `Ok(None)` when the
    /// tag left the field (recoverable: re-present the tag and retry), or
    /// `Err` on a fatal transport failure.
    fn transceive(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>>;
}

impl<T: Transceive + ?Sized> Transceive for Box<T> {
    fn transceive(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).transceive(request)
    }
}
