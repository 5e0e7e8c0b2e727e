//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockDriver setup so tests across the crate
//! and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, Initialized};
use crate::driver::MockDriver;
use crate::target::Target;
use crate::types::{BaudRate, Modulation, ModulationType, Uid};
use crate::Result;

/// 7-byte UID used by [`sample_target`].
#[doc(hidden)]
pub const SAMPLE_UID: [u8; 7] = [0x04, 0x8a, 0x2b, 0x72, 0x15, 0x64, 0x80];

/// Create and initialize a Device backed by a clone of `mock`. The caller
/// keeps `mock` to script results and inspect the recorded calls.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockDriver) -> Result<Device<Initialized>> {
    Device::new_with_driver(Box::new(mock.clone())).initialize()
}

/// ISO14443-A/106 target with [`SAMPLE_UID`] and the given SAK.
#[doc(hidden)]
pub fn sample_target(sak: u8) -> Target {
    let mut raw = [0u8; crate::constants::MAX_UID_LEN];
    raw[..SAMPLE_UID.len()].copy_from_slice(&SAMPLE_UID);
    // Raw parts with a length inside bounds cannot fail.
    let uid = Uid::from_raw_parts(raw, SAMPLE_UID.len()).unwrap_or_default();
    Target::new(
        Modulation::new(ModulationType::Iso14443a, BaudRate::Nbr106),
        [0x00, 0x44],
        sak,
        uid,
        Vec::new(),
    )
}
