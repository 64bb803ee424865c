// ISO15693 memory dump example.

// This example demonstrates the read flow against a scripted MockTransceive:
// Get System Information for the geometry, then Read Multiple Blocks and
// print each block. With a real radio, implement `Transceive` over the
// platform's NFC-V transceive call and pass that instead.

use libnfctag::prelude::*;
use libnfctag::test_support;
use libnfctag::transport::MockTransceive;

fn main() -> Result<()> {
    env_logger::init();

    let uid = test_support::fixture_uid();
    let mut mock = MockTransceive::new();
    // 4 blocks of 4 bytes, then the read response carrying them
    mock.push_response(test_support::sysinfo_response(0x03, 0x03));
    let mut read = vec![0x00];
    for i in 0..4u8 {
        read.push(0x00);
        read.extend_from_slice(&[i; 4]);
    }
    mock.push_response(read);

    let mut tag = Iso15693Tag::new(mock, uid, 0x00);

    let sysinfo = tag.system_information()?;
    let info = sysinfo.info.ok_or(Error::MissingMemoryInfo)?;
    let mem = info.memory_info.ok_or(Error::MissingMemoryInfo)?;
    println!(
        "UID {}: {} blocks x {} bytes",
        uid.to_hex(),
        mem.number_of_blocks(),
        mem.block_size()
    );

    let resp = tag.read_multiple_blocks(0, mem.block_size(), mem.number_of_blocks() as u8)?;
    for (i, block) in resp.blocks.iter().enumerate() {
        println!(
            "block {:3}: {}{}",
            i,
            block.to_hex(),
            if block.is_locked() { " (locked)" } else { "" }
        );
    }

    Ok(())
}
