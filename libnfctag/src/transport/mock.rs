// libnfctag-rs/libnfctag/src/transport/mock.rs

use crate::transport::traits::Transceive;
use crate::{Error, Result};

/// Mock transceiver for unit tests. It records sent requests and returns
/// queued responses in order; a queued `None` simulates a lost tag.
#[derive(Debug, Default)]
pub struct MockTransceive {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Option<Vec<u8>>>,
    /// Testing hook: number of transceive calls that should fail with an
    /// I/O error before any queued response is consumed.
    pub io_failures: usize,
}

impl MockTransceive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Some(resp));
    }

    /// Queue a tag-lost result for the next exchange.
    pub fn push_tag_lost(&mut self) {
        self.responses.push(None);
    }

    /// Set how many subsequent transceive calls should fail (for tests).
    pub fn set_io_failures(&mut self, n: usize) {
        self.io_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceive for MockTransceive {
    fn transceive(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>> {
        if self.io_failures > 0 {
            self.io_failures -= 1;
            return Err(Error::Io("mock i/o failure".into()));
        }
        self.sent.push(request.to_vec());
        if self.responses.is_empty() {
            // Running out of seeded responses is a test setup bug; surface
            // it as an i/o error rather than panicking.
            Err(Error::Io("mock response queue exhausted".into()))
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
