#[path = "../common/mod.rs"]
mod common;

use nfctag::constants::MAX_UID_LEN;
use nfctag::driver::MockDriver;
use nfctag::prelude::*;
use proptest::prelude::*;

#[test]
fn uid_hex_of_fixture() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    let target = common::fixtures::iso_dep_target();
    let tag = GenericTag::new(&target, &dev);
    assert_eq!(tag.uid(), &common::fixtures::sample_uid_bytes());
    assert_eq!(tag.uid_hex(), "048a2b72156480");
}

proptest! {
    // uid_hex is the lowercase hex of exactly `len` bytes whatever the
    // buffer holds past that length.
    #[test]
    fn uid_hex_ignores_padding(
        buffer in prop::array::uniform10(any::<u8>()),
        len in 0..=MAX_UID_LEN,
    ) {
        let mock = MockDriver::new();
        let dev = common::device_with(&mock).unwrap();
        let uid = Uid::from_raw_parts(buffer, len).unwrap();
        let target = Target::builder().uid(uid).sak(0x20).build().unwrap();
        let tag = dev.tag(&target);

        prop_assert_eq!(tag.uid(), &buffer[..len]);
        prop_assert_eq!(tag.uid_hex(), hex::encode(&buffer[..len]));
        prop_assert_eq!(tag.uid_hex().len(), len * 2);
    }
}
