// nfctag/src/apdu/response.rs

use crate::apdu::parser::split_status;
use crate::apdu::{StatusError, StatusWord};
use crate::Result;

/// Response APDU: data field followed by SW1 SW2.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    data: Vec<u8>,
    status: StatusWord,
}

impl Response {
    pub fn new(data: Vec<u8>, status: StatusWord) -> Self {
        Self { data, status }
    }

    /// Decode raw response bytes. At least the two status bytes must be present.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let (data, status) = split_status(raw)?;
        Ok(Self::new(data.to_vec(), status))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    pub fn sw1(&self) -> u8 {
        self.status.sw1()
    }

    pub fn sw2(&self) -> u8 {
        self.status.sw2()
    }

    /// True iff the status word is 9000.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-success status word into its semantic error.
    pub fn ensure_success(&self) -> std::result::Result<(), StatusError> {
        match StatusError::from_status(self.status) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Encode back into wire bytes (data followed by SW1 SW2).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.extend_from_slice(&self.data);
        out.push(self.sw1());
        out.push(self.sw2());
        out
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = crate::Error;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::decode(raw)
    }
}
