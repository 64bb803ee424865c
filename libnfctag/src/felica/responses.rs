// libnfctag-rs/libnfctag/src/felica/responses.rs

use crate::constants::{
    FELICA_BLOCK_LEN, FELICA_RESP_READ_WITHOUT_ENCRYPTION, FELICA_RESP_WRITE_WITHOUT_ENCRYPTION,
};
use crate::types::{FelicaBlockData, Idm};
use crate::{Error, Result, parser};

/// Decode ReadWithoutEncryption response payload (response code 0x07).
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1) +
/// block_count(1) + blocks(n*16). Non-zero status is a FelicaStatus error.
pub fn decode_read(data: &[u8]) -> Result<(Idm, Vec<FelicaBlockData>)> {
    const MIN_LEN: usize = 1 + 8 + 1 + 1 + 1; // 12
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, FELICA_RESP_READ_WITHOUT_ENCRYPTION)?;

    let idm = parser::idm_at(data, 1)?;
    let status1 = parser::byte_at(data, 9)?;
    let status2 = parser::byte_at(data, 10)?;
    if status1 != 0 || status2 != 0 {
        return Err(Error::FelicaStatus { status1, status2 });
    }

    let block_count = parser::byte_at(data, 11)? as usize;
    parser::ensure_len(data, MIN_LEN + block_count * FELICA_BLOCK_LEN)?;

    let mut blocks = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let offset = MIN_LEN + i * FELICA_BLOCK_LEN;
        let slice = parser::slice_at(data, offset, FELICA_BLOCK_LEN)?;
        let mut block = [0u8; FELICA_BLOCK_LEN];
        block.copy_from_slice(slice);
        blocks.push(FelicaBlockData::from_bytes(block));
    }

    Ok((idm, blocks))
}

/// Decode WriteWithoutEncryption response payload (response code 0x09).
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1).
pub fn decode_write(data: &[u8]) -> Result<Idm> {
    const MIN_LEN: usize = 1 + 8 + 1 + 1; // 11
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, FELICA_RESP_WRITE_WITHOUT_ENCRYPTION)?;

    let idm = parser::idm_at(data, 1)?;
    let status1 = parser::byte_at(data, 9)?;
    let status2 = parser::byte_at(data, 10)?;
    if status1 != 0 || status2 != 0 {
        return Err(Error::FelicaStatus { status1, status2 });
    }

    Ok(idm)
}
