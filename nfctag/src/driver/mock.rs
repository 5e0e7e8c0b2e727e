// nfctag/src/driver/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::driver::traits::Driver;
use crate::types::{Modulation, Property};
use crate::{Error, Result};

/// Driver call recorded by [`MockDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    Initialize,
    SetProperty {
        property: Property,
        enable: bool,
    },
    SelectPassiveTarget {
        modulation: Modulation,
        init_data: Vec<u8>,
    },
    Deselect,
    Transceive {
        tx: Vec<u8>,
        timeout_ms: i32,
    },
}

/// Scripted transceive outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Bytes(Vec<u8>),
    /// Negative driver code
    Error(i32),
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<DriverCall>,
    select_results: VecDeque<i32>,
    replies: VecDeque<Reply>,
    deselect_result: i32,
    fail_initialize: bool,
}

/// Mock driver for unit tests. It records every call and answers from queued
/// results.
///
/// Clones share the same state, so a test can keep one handle for inspection
/// after the other has been boxed into a [`crate::device::Device`]. With no
/// queued select result the target is reported absent (0); with no queued
/// reply transceive fails with -1.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    state: Rc<RefCell<MockState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `select_passive_target`.
    pub fn push_select_result(&self, result: i32) {
        self.state.borrow_mut().select_results.push_back(result);
    }

    /// Queue response bytes for the next `transceive_bytes`.
    pub fn push_reply(&self, bytes: Vec<u8>) {
        self.state.borrow_mut().replies.push_back(Reply::Bytes(bytes));
    }

    /// Queue a negative driver code for the next `transceive_bytes`.
    pub fn push_transceive_error(&self, code: i32) {
        self.state.borrow_mut().replies.push_back(Reply::Error(code));
    }

    pub fn set_deselect_result(&self, result: i32) {
        self.state.borrow_mut().deselect_result = result;
    }

    /// Make the next `initialize` fail (for tests).
    pub fn set_fail_initialize(&self, fail: bool) {
        self.state.borrow_mut().fail_initialize = fail;
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of deselect calls seen so far.
    pub fn deselect_count(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, DriverCall::Deselect))
            .count()
    }

    fn record(&self, call: DriverCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl Driver for MockDriver {
    fn initialize(&mut self) -> Result<()> {
        self.record(DriverCall::Initialize);
        if self.state.borrow().fail_initialize {
            return Err(Error::InitializationFailed("mock reader unavailable".into()));
        }
        Ok(())
    }

    fn select_passive_target(&mut self, modulation: Modulation, init_data: &[u8]) -> i32 {
        self.record(DriverCall::SelectPassiveTarget {
            modulation,
            init_data: init_data.to_vec(),
        });
        self.state.borrow_mut().select_results.pop_front().unwrap_or(0)
    }

    fn deselect_target(&mut self) -> i32 {
        self.record(DriverCall::Deselect);
        self.state.borrow().deselect_result
    }

    fn transceive_bytes(&mut self, tx: &[u8], rx: &mut [u8], timeout_ms: i32) -> i32 {
        self.record(DriverCall::Transceive {
            tx: tx.to_vec(),
            timeout_ms,
        });
        let reply = self.state.borrow_mut().replies.pop_front();
        match reply {
            Some(Reply::Bytes(bytes)) => {
                // Real readers truncate to the caller's buffer.
                let n = bytes.len().min(rx.len());
                rx[..n].copy_from_slice(&bytes[..n]);
                n as i32
            }
            Some(Reply::Error(code)) => code,
            None => -1,
        }
    }

    fn set_property_bool(&mut self, property: Property, enable: bool) -> i32 {
        self.record(DriverCall::SetProperty { property, enable });
        0
    }
}
