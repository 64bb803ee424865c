// libnfctag-rs/libnfctag/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockTransceive;
pub use traits::Transceive;
