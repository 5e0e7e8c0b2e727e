// nfctag/src/tag/generic.rs

use std::cell::Cell;
use std::fmt;

use log::debug;

use crate::device::{Device, Initialized};
use crate::tag::Tag;
use crate::target::Target;
use crate::types::ConnectionState;

/// Protocol shared by every tag type: presence check, UID accessors and the
/// connection state. Used on its own it matches any target and its
/// connect/disconnect do nothing on the reader.
pub struct GenericTag<'a> {
    target: &'a Target,
    device: &'a Device<Initialized>,
    state: Cell<ConnectionState>,
}

impl<'a> GenericTag<'a> {
    pub fn new(target: &'a Target, device: &'a Device<Initialized>) -> Self {
        Self {
            target,
            device,
            state: Cell::new(ConnectionState::Disconnected),
        }
    }

    pub fn target(&self) -> &'a Target {
        self.target
    }

    pub fn device(&self) -> &'a Device<Initialized> {
        self.device
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub(crate) fn set_state(&self, state: ConnectionState) {
        self.state.set(state);
    }

    pub fn uid(&self) -> &'a [u8] {
        self.target.uid().as_bytes()
    }

    /// Lowercase hex of the UID, no separators.
    pub fn uid_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.uid())
    }

    /// Select the target again with its own modulation and UID. True iff the
    /// reader selected at least one target. The connection state is untouched.
    pub fn present(&self) -> bool {
        let res = self
            .device
            .select_passive_target(self.target.modulation(), self.uid());
        debug!("presence check for {} -> {}", self.uid_hex(), res);
        res >= 1
    }
}

impl Tag for GenericTag<'_> {
    /// Matches any tag
    fn matches(_target: &Target) -> bool {
        true
    }

    fn base(&self) -> &GenericTag<'_> {
        self
    }
}

impl fmt::Display for GenericTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uid_hex())
    }
}
