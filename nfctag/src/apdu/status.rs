// nfctag/src/apdu/status.rs

use derive_more::{Display, From, Into};
use thiserror::Error;

use crate::constants::SW_SUCCESS;

/// Status word (SW1 SW2) trailing every APDU response.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    pub const SUCCESS: Self = Self(SW_SUCCESS);

    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    pub const fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn sw1(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn sw2(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// Semantic error for a non-success status word (ISO/IEC 7816-4 section 5.1.3).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    #[error("more data available: {0} bytes remaining")]
    MoreDataAvailable(u8),

    #[error("warning, non-volatile memory unchanged (SW={0})")]
    WarningUnchanged(StatusWord),

    #[error("verification failed: {0} retries left")]
    VerificationFailed(u8),

    #[error("warning, non-volatile memory changed (SW={0})")]
    WarningChanged(StatusWord),

    #[error("execution error (SW={0})")]
    ExecutionError(StatusWord),

    #[error("wrong length")]
    WrongLength,

    #[error("logical channel not supported")]
    LogicalChannelNotSupported,

    #[error("secure messaging not supported")]
    SecureMessagingNotSupported,

    #[error("security status not satisfied")]
    SecurityStatusNotSatisfied,

    #[error("authentication method blocked")]
    AuthenticationBlocked,

    #[error("reference data invalidated")]
    ReferenceDataInvalidated,

    #[error("conditions of use not satisfied")]
    ConditionsNotSatisfied,

    #[error("command not allowed (no current EF)")]
    CommandNotAllowed,

    #[error("incorrect parameters in the data field")]
    IncorrectData,

    #[error("function not supported")]
    FunctionNotSupported,

    #[error("file or application not found")]
    FileNotFound,

    #[error("record not found")]
    RecordNotFound,

    #[error("not enough memory space in the file")]
    NotEnoughMemory,

    #[error("incorrect parameters P1-P2")]
    IncorrectParameters,

    #[error("referenced data not found")]
    ReferenceDataNotFound,

    #[error("wrong parameters P1-P2")]
    WrongParameters,

    #[error("wrong Le field: {0} bytes available")]
    WrongLe(u8),

    #[error("instruction code not supported or invalid")]
    InstructionNotSupported,

    #[error("class not supported")]
    ClassNotSupported,

    #[error("no precise diagnosis")]
    NoPreciseDiagnosis,

    #[error("unknown status word {0}")]
    Unknown(StatusWord),
}

impl StatusError {
    /// Map a status word to its semantic error. Returns `None` for 9000.
    pub fn from_status(sw: StatusWord) -> Option<Self> {
        if sw.is_success() {
            return None;
        }

        let err = match (sw.sw1(), sw.sw2()) {
            (0x61, n) => Self::MoreDataAvailable(n),
            (0x62, _) => Self::WarningUnchanged(sw),
            (0x63, n) if n & 0xf0 == 0xc0 => Self::VerificationFailed(n & 0x0f),
            (0x63, _) => Self::WarningChanged(sw),
            (0x64, _) | (0x65, _) => Self::ExecutionError(sw),
            (0x67, 0x00) => Self::WrongLength,
            (0x68, 0x81) => Self::LogicalChannelNotSupported,
            (0x68, 0x82) => Self::SecureMessagingNotSupported,
            (0x69, 0x82) => Self::SecurityStatusNotSatisfied,
            (0x69, 0x83) => Self::AuthenticationBlocked,
            (0x69, 0x84) => Self::ReferenceDataInvalidated,
            (0x69, 0x85) => Self::ConditionsNotSatisfied,
            (0x69, 0x86) => Self::CommandNotAllowed,
            (0x6A, 0x80) => Self::IncorrectData,
            (0x6A, 0x81) => Self::FunctionNotSupported,
            (0x6A, 0x82) => Self::FileNotFound,
            (0x6A, 0x83) => Self::RecordNotFound,
            (0x6A, 0x84) => Self::NotEnoughMemory,
            (0x6A, 0x86) => Self::IncorrectParameters,
            (0x6A, 0x88) => Self::ReferenceDataNotFound,
            (0x6B, 0x00) => Self::WrongParameters,
            (0x6C, n) => Self::WrongLe(n),
            (0x6D, 0x00) => Self::InstructionNotSupported,
            (0x6E, 0x00) => Self::ClassNotSupported,
            (0x6F, 0x00) => Self::NoPreciseDiagnosis,
            _ => Self::Unknown(sw),
        };
        Some(err)
    }

    /// The status word this error was derived from.
    pub fn status_word(&self) -> StatusWord {
        let raw: u16 = match *self {
            Self::MoreDataAvailable(n) => 0x6100 | n as u16,
            Self::VerificationFailed(n) => 0x63c0 | n as u16,
            Self::WrongLe(n) => 0x6c00 | n as u16,
            Self::WarningUnchanged(sw)
            | Self::WarningChanged(sw)
            | Self::ExecutionError(sw)
            | Self::Unknown(sw) => sw.as_u16(),
            Self::WrongLength => 0x6700,
            Self::LogicalChannelNotSupported => 0x6881,
            Self::SecureMessagingNotSupported => 0x6882,
            Self::SecurityStatusNotSatisfied => 0x6982,
            Self::AuthenticationBlocked => 0x6983,
            Self::ReferenceDataInvalidated => 0x6984,
            Self::ConditionsNotSatisfied => 0x6985,
            Self::CommandNotAllowed => 0x6986,
            Self::IncorrectData => 0x6a80,
            Self::FunctionNotSupported => 0x6a81,
            Self::FileNotFound => 0x6a82,
            Self::RecordNotFound => 0x6a83,
            Self::NotEnoughMemory => 0x6a84,
            Self::IncorrectParameters => 0x6a86,
            Self::ReferenceDataNotFound => 0x6a88,
            Self::WrongParameters => 0x6b00,
            Self::InstructionNotSupported => 0x6d00,
            Self::ClassNotSupported => 0x6e00,
            Self::NoPreciseDiagnosis => 0x6f00,
        };
        StatusWord::new(raw)
    }
}
