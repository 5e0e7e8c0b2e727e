// nfctag/src/target/builder.rs

use crate::target::Target;
use crate::types::{Modulation, Uid};
use crate::{Error, Result};

/// Builder for [`Target`] descriptors, mainly for discovery code and tests.
///
/// Modulation defaults to ISO14443-A at 106 kbps; a UID is required.
pub struct TargetBuilder {
    modulation: Modulation,
    atqa: [u8; 2],
    sak: u8,
    uid: Option<Uid>,
    ats: Vec<u8>,
}

impl Default for TargetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetBuilder {
    pub fn new() -> Self {
        Self {
            modulation: Modulation::ISO14443A_106,
            atqa: [0; 2],
            sak: 0,
            uid: None,
            ats: Vec::new(),
        }
    }

    pub fn modulation(mut self, modulation: Modulation) -> Self {
        self.modulation = modulation;
        self
    }

    pub fn atqa(mut self, atqa: [u8; 2]) -> Self {
        self.atqa = atqa;
        self
    }

    pub fn sak(mut self, sak: u8) -> Self {
        self.sak = sak;
        self
    }

    pub fn uid(mut self, uid: Uid) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Set the UID from a byte slice (at most 10 bytes).
    pub fn uid_bytes(mut self, bytes: &[u8]) -> Result<Self> {
        self.uid = Some(Uid::try_from(bytes)?);
        Ok(self)
    }

    pub fn ats(mut self, ats: Vec<u8>) -> Self {
        self.ats = ats;
        self
    }

    pub fn build(self) -> Result<Target> {
        let uid = self.uid.ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })?;
        Ok(Target::new(self.modulation, self.atqa, self.sak, uid, self.ats))
    }
}
