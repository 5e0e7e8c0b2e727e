// nfctag/src/error.rs

use thiserror::Error;

use crate::apdu::StatusError;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("device initialization failed: {0}")]
    InitializationFailed(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("apdu payload too long: max {max}, got {actual}")]
    PayloadTooLong { max: usize, actual: usize },

    /// The driver could not select the target during activation.
    #[error("can't select tag: {0}")]
    SelectFailed(i32),

    /// The driver reported a negative length from a transceive.
    #[error("apdu sending failed: {0}")]
    TransceiveFailed(i32),

    #[error("tag is already connected")]
    AlreadyConnected,

    #[error(transparent)]
    Status(#[from] StatusError),
}

pub type Result<T> = std::result::Result<T, Error>;
