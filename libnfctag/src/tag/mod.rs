// libnfctag-rs/libnfctag/src/tag/mod.rs

//! Tag access layer: command orchestration over a [`Transceive`] transport.
//!
//! Tag structs own their transport and compose the codec modules; they add
//! no protocol state beyond the tag identifier they were constructed with.
//!
//! [`Transceive`]: crate::transport::Transceive

pub mod felica;
pub mod iso15693;

pub use felica::FelicaTag;
pub use iso15693::Iso15693Tag;
