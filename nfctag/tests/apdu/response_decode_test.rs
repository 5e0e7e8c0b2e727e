#[path = "../common/mod.rs"]
mod common;

use nfctag::apdu::{Command, Response, StatusError, StatusWord};

#[test]
fn select_then_success_response() {
    let cmd = Command::select_by_name(&common::fixtures::VISA_AID).unwrap();
    assert_eq!(cmd.encode(), hex::decode("00a4040005a000000003").unwrap());

    let resp = Response::decode(&common::fixtures::ok_response()).unwrap();
    assert!(resp.is_success());
    assert!(resp.ensure_success().is_ok());
    assert!(resp.data().is_empty());
}

#[test]
fn fci_response_decodes_data_and_status() {
    let raw = hex::decode("6f0f8407a0000000031010a5049f3801009000").unwrap();
    let resp = Response::try_from(raw.as_slice()).unwrap();
    assert_eq!(resp.status(), StatusWord::SUCCESS);
    assert_eq!(resp.data(), &raw[..raw.len() - 2]);
    assert_eq!(resp.encode(), raw);
}

#[test]
fn error_response_maps_status() {
    let resp = Response::decode(&[0x69, 0x85]).unwrap();
    assert_eq!((resp.sw1(), resp.sw2()), (0x69, 0x85));
    let err = resp.ensure_success().unwrap_err();
    assert_eq!(err, StatusError::ConditionsNotSatisfied);
    assert_eq!(err.status_word(), StatusWord::new(0x6985));
}
