#[path = "../common/mod.rs"]
mod common;

use nfctag::apdu::Command;
use nfctag::Error;

#[test]
fn select_visa_matches_fixture() {
    let cmd = Command::select_by_name(&common::fixtures::VISA_AID).unwrap();
    assert_eq!(cmd.encode(), common::fixtures::select_visa_apdu());
    assert_eq!(Vec::from(&cmd), common::fixtures::select_visa_apdu());
}

#[test]
fn select_header_fields() {
    let cmd = Command::select_by_name(&[0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01]).unwrap();
    assert_eq!(
        (cmd.cla(), cmd.ins(), cmd.p1(), cmd.p2()),
        (0x00, 0xA4, 0x04, 0x00)
    );
    assert_eq!(cmd.data().len(), 7);
    assert_eq!(cmd.le(), None);
}

#[test]
fn oversized_aid_is_rejected() {
    let aid = vec![0xA0; 300];
    assert!(matches!(
        Command::select_by_name(&aid),
        Err(Error::PayloadTooLong {
            max: 255,
            actual: 300
        })
    ));
}
