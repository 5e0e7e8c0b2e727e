#[path = "../common/mod.rs"]
mod common;

use nfctag::driver::{DriverCall, MockDriver};
use nfctag::prelude::*;

#[test]
fn select_sends_select_by_name() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(common::fixtures::ok_response());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let resp = tag
        .session(|conn| conn.select(&common::fixtures::VISA_AID))
        .unwrap();

    assert!(resp.is_success());
    assert!(resp.ensure_success().is_ok());
    assert!(mock.calls().contains(&DriverCall::Transceive {
        tx: common::fixtures::select_visa_apdu(),
        timeout_ms: 0,
    }));
}

#[test]
fn select_leaves_status_to_caller() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(common::fixtures::file_not_found_response());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let resp = tag
        .session(|conn| conn.select(&common::fixtures::VISA_AID))
        .unwrap();
    assert_eq!(resp.status(), StatusWord::new(0x6A82));
    assert_eq!(resp.ensure_success(), Err(StatusError::FileNotFound));
}

#[test]
fn select_checked_fails_for_missing_application() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(common::fixtures::file_not_found_response());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let res = tag.session(|conn| conn.select_checked(&common::fixtures::VISA_AID));
    assert!(matches!(res, Err(Error::Status(StatusError::FileNotFound))));
    assert_eq!(mock.deselect_count(), 1);
}

#[test]
fn checked_and_unchecked_send_differ_only_on_status() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);
    let conn = tag.connect().unwrap();
    let get_challenge = [0x00, 0x84, 0x00, 0x00, 0x08];

    for (reply, ok) in [
        (vec![0x90, 0x00], true),
        (vec![0x11, 0x22, 0x90, 0x00], true),
        (vec![0x63, 0xC1], false),
        (vec![0x69, 0x82], false),
        (vec![0x61, 0x10], false),
    ] {
        mock.push_reply(reply.clone());
        mock.push_reply(reply);

        let plain = conn.send_apdu(&get_challenge).unwrap();
        assert_eq!(plain.is_success(), ok);

        let checked = conn.send_apdu_checked(&get_challenge);
        assert_eq!(checked.is_ok(), ok);
        if !ok {
            assert!(matches!(checked, Err(Error::Status(_))));
        }
    }
}

#[test]
fn transceive_failure_keeps_connection() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_transceive_error(-6);
    mock.push_reply(common::fixtures::ok_response());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);
    let conn = tag.connect().unwrap();

    let err = conn.send_apdu(&common::fixtures::select_visa_apdu()).unwrap_err();
    assert!(matches!(err, Error::TransceiveFailed(-6)));
    assert_eq!(err.to_string(), "apdu sending failed: -6");
    assert_eq!(conn.state(), ConnectionState::Connected);

    // Retry on the same connection
    assert!(conn.send_apdu(&common::fixtures::select_visa_apdu()).unwrap().is_success());
}

#[test]
fn empty_response_is_invalid() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(Vec::new());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let res = tag.session(|conn| conn.send_apdu(&[0x00, 0xB0, 0x00, 0x00]));
    assert!(matches!(
        res,
        Err(Error::InvalidLength {
            expected: 2,
            actual: 0
        })
    ));
}

#[test]
fn operator_alias_and_transmit() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(vec![0x6F, 0x00, 0x90, 0x00]);
    mock.push_reply(vec![0x01, 0x90, 0x00]);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    tag.session(|conn| {
        let apdu = common::fixtures::select_visa_apdu();
        let fci = (conn << apdu.as_slice())?;
        assert_eq!(fci.data(), &[0x6F, 0x00]);

        let read = Command::new(0x00, 0xB0, 0x00, 0x00).with_le(0x01);
        let resp = conn.transmit(&read)?;
        assert_eq!(resp.data(), &[0x01]);
        Ok(())
    })
    .unwrap();

    let sent: Vec<Vec<u8>> = mock
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            DriverCall::Transceive { tx, .. } => Some(tx),
            _ => None,
        })
        .collect();
    assert_eq!(
        sent,
        vec![
            common::fixtures::select_visa_apdu(),
            vec![0x00, 0xB0, 0x00, 0x00, 0x01]
        ]
    );
}

#[test]
fn activation_uses_fixed_modulation() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    tag.session(|_| Ok(())).unwrap();

    assert_eq!(
        mock.calls()[..2],
        [
            DriverCall::SetProperty {
                property: Property::AutoIso14443_4,
                enable: true,
            },
            DriverCall::SelectPassiveTarget {
                modulation: Modulation::new(ModulationType::Iso14443a, BaudRate::Nbr106),
                init_data: common::fixtures::sample_uid_bytes().to_vec(),
            },
        ]
    );
}
