// libnfctag-rs/libnfctag/src/lib.rs

//! libnfctag
//!
//! Pure Rust codec for ISO15693 (NFC-V) and FeliCa contactless tags.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod felica;
pub mod iso15693;
pub mod parser;
pub mod prelude;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
