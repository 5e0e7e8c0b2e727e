// nfctag/src/apdu/command.rs

use crate::constants::{
    MAX_SHORT_APDU_DATA_LEN, SELECT_CLA, SELECT_INS, SELECT_P1_BY_NAME, SELECT_P2_FIRST,
};
use crate::{Error, Result};

/// Short ISO/IEC 7816-4 command APDU.
///
/// Wire format: `CLA INS P1 P2 [Lc Data] [Le]`. Lc is a single byte, so the
/// data field is limited to 255 bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    cla: u8,
    ins: u8,
    p1: u8,
    p2: u8,
    data: Vec<u8>,
    le: Option<u8>,
}

impl Command {
    /// Header-only command (case 1).
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Attach a data field. Fails when it does not fit a single-byte Lc.
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        if data.len() > MAX_SHORT_APDU_DATA_LEN {
            return Err(Error::PayloadTooLong {
                max: MAX_SHORT_APDU_DATA_LEN,
                actual: data.len(),
            });
        }
        self.data = data;
        Ok(self)
    }

    /// Expected response length; 0 requests up to 256 bytes.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// SELECT by DF name (application identifier), first occurrence.
    pub fn select_by_name(aid: &[u8]) -> Result<Self> {
        Self::new(SELECT_CLA, SELECT_INS, SELECT_P1_BY_NAME, SELECT_P2_FIRST).with_data(aid)
    }

    pub fn cla(&self) -> u8 {
        self.cla
    }

    pub fn ins(&self) -> u8 {
        self.ins
    }

    pub fn p1(&self) -> u8 {
        self.p1
    }

    pub fn p2(&self) -> u8 {
        self.p2
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn le(&self) -> Option<u8> {
        self.le
    }

    /// Encode the command into its wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        out
    }
}

impl From<&Command> for Vec<u8> {
    fn from(cmd: &Command) -> Self {
        cmd.encode()
    }
}
