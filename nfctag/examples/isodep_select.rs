// IsoDep session example
//
// Runs against the in-memory MockDriver so it works without a reader: the
// script below answers the SELECT of the Visa AID with an FCI template.
// Run with `RUST_LOG=trace` to see the APDU traffic.

use anyhow::Context;
use nfctag::driver::MockDriver;
use nfctag::prelude::*;

const VISA_AID: [u8; 5] = [0xA0, 0x00, 0x00, 0x00, 0x03];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let driver = MockDriver::new();
    driver.push_select_result(1);
    driver.push_reply(hex::decode("6f0b8407a0000000031010a5009000")?);

    let device = DeviceBuilder::new()
        .with_driver(Box::new(driver.clone()))
        .transceive_timeout_ms(500)
        .build_uninitialized()?
        .initialize()
        .context("initializing reader")?;

    let target = Target::builder()
        .atqa([0x00, 0x04])
        .sak(0x20)
        .uid_bytes(&[0x08, 0x12, 0x34, 0x56])?
        .build()?;

    let tag = device.tag(&target);
    println!("Found {:?} tag {}", tag.kind(), tag);

    let Some(tag) = tag.into_iso_dep() else {
        println!("Tag does not speak ISO14443-4");
        return Ok(());
    };

    let fci = tag
        .session(|conn| conn.select(&VISA_AID))
        .context("selecting Visa application")?;

    match fci.ensure_success() {
        Ok(()) => println!("FCI: {}", bytes_to_hex_spaced(fci.data())),
        Err(e) => println!("SELECT rejected: {} (SW={})", e, fci.status()),
    }
    tag.mark_processed();

    println!("Driver calls: {}", driver.calls().len());
    Ok(())
}
