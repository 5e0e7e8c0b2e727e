// nfctag/src/target/mod.rs

use std::cell::Cell;

use crate::constants::ISO14443_4_COMPATIBLE;
use crate::types::{Modulation, Uid};

pub mod builder;
pub use builder::TargetBuilder;

/// Descriptor of a discovered tag, as reported by the reader's anti-collision.
///
/// Immutable once built. The processed flag is the one piece of caller
/// bookkeeping kept here; tags read and set it through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    modulation: Modulation,
    atqa: [u8; 2],
    sak: u8,
    uid: Uid,
    ats: Vec<u8>,
    processed: Cell<bool>,
}

impl Target {
    pub fn new(modulation: Modulation, atqa: [u8; 2], sak: u8, uid: Uid, ats: Vec<u8>) -> Self {
        Self {
            modulation,
            atqa,
            sak,
            uid,
            ats,
            processed: Cell::new(false),
        }
    }

    pub fn builder() -> TargetBuilder {
        TargetBuilder::new()
    }

    pub fn modulation(&self) -> Modulation {
        self.modulation
    }

    pub fn atqa(&self) -> [u8; 2] {
        self.atqa
    }

    /// Select acknowledge byte
    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Answer to select (empty unless the reader ran RATS)
    pub fn ats(&self) -> &[u8] {
        &self.ats
    }

    /// SAK announces ISO/IEC 14443-4 support
    pub fn is_iso14443_4(&self) -> bool {
        self.sak & ISO14443_4_COMPATIBLE != 0
    }

    pub fn mark_processed(&self) {
        self.processed.set(true);
    }

    pub fn is_processed(&self) -> bool {
        self.processed.get()
    }
}
