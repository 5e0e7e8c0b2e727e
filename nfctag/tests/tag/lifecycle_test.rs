#[path = "../common/mod.rs"]
mod common;

use std::panic::{AssertUnwindSafe, catch_unwind};

use nfctag::driver::{DriverCall, MockDriver};
use nfctag::prelude::*;

#[test]
fn no_connect_means_no_driver_calls() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    let target = common::fixtures::iso_dep_target();

    let tag = IsoDepTag::new(&target, &dev);
    assert_eq!(tag.uid_hex(), "048a2b72156480");
    assert_eq!(tag.state(), ConnectionState::Disconnected);
    assert!(mock.calls().is_empty());
}

#[test]
fn failed_activation_never_runs_body() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(0);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let mut body_ran = false;
    let res = tag.session(|_| {
        body_ran = true;
        Ok(())
    });

    assert!(matches!(res, Err(Error::SelectFailed(0))));
    assert!(!body_ran);
    assert_eq!(mock.deselect_count(), 0);
    assert_eq!(tag.state(), ConnectionState::Disconnected);
}

#[test]
fn body_error_disconnects_exactly_once() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let res: Result<()> = tag.session(|conn| {
        assert_eq!(conn.state(), ConnectionState::Connected);
        Err(Error::TransceiveFailed(-1))
    });

    assert!(matches!(res, Err(Error::TransceiveFailed(-1))));
    assert_eq!(mock.deselect_count(), 1);
    assert_eq!(mock.calls().last(), Some(&DriverCall::Deselect));
    assert_eq!(tag.state(), ConnectionState::Disconnected);
}

#[test]
fn panicking_body_still_disconnects() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _: Result<()> = tag.session(|_| panic!("application logic failed"));
    }));

    assert!(outcome.is_err());
    assert_eq!(mock.deselect_count(), 1);
}

#[test]
fn early_return_from_guard_scope_disconnects() {
    fn read_first_byte(tag: &IsoDepTag<'_>) -> Result<Option<u8>> {
        let conn = tag.connect()?;
        let resp = conn.send_apdu(&[0x00, 0xB0, 0x00, 0x00, 0x01])?;
        if !resp.is_success() {
            return Ok(None);
        }
        Ok(resp.data().first().copied())
    }

    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    mock.push_select_result(1);
    mock.push_reply(common::fixtures::file_not_found_response());
    let target = common::fixtures::iso_dep_target();
    let tag = IsoDepTag::new(&target, &dev);

    assert_eq!(read_first_byte(&tag).unwrap(), None);
    assert_eq!(mock.deselect_count(), 1);
    assert_eq!(tag.state(), ConnectionState::Disconnected);
}

#[test]
fn present_is_independent_of_connection() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    let target = common::fixtures::memory_target();
    let tag = dev.tag(&target);

    mock.push_select_result(0);
    assert!(!tag.present());
    mock.push_select_result(1);
    assert!(tag.present());
    assert_eq!(tag.state(), ConnectionState::Disconnected);
    assert_eq!(mock.deselect_count(), 0);
}

#[test]
fn processed_bookkeeping_is_shared_with_target() {
    let mock = MockDriver::new();
    let dev = common::device_with(&mock).unwrap();
    let target = common::fixtures::memory_target();

    {
        let tag = dev.tag(&target);
        assert!(!tag.is_processed());
        tag.mark_processed();
    }
    assert!(target.is_processed());
    assert!(dev.tag(&target).is_processed());
}
