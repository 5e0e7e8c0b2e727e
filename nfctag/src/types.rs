// nfctag/src/types.rs

use std::fmt;

use crate::Error;
use crate::constants::MAX_UID_LEN;

/// UID - fixed buffer plus the length reported during anti-collision.
///
/// The buffer may carry padding past `len`; every accessor only exposes the
/// first `len` bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: usize,
}

impl Uid {
    /// Build from a raw reader buffer and its recorded length.
    pub fn from_raw_parts(bytes: [u8; MAX_UID_LEN], len: usize) -> Result<Self, Error> {
        if len > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: len,
            });
        }
        Ok(Self { bytes, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len(),
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Modulation family of a target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulationType {
    Iso14443a,
    Jewel,
    Iso14443b,
    /// ISO14443-B' (pre-standard, Innovatron)
    Iso14443bi,
    Iso14443b2sr,
    Iso14443b2ct,
    Felica,
    Dep,
    Barcode,
    Iso14443biClass,
}

/// Radio bit rate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaudRate {
    #[default]
    Undefined,
    Nbr106,
    Nbr212,
    Nbr424,
    Nbr847,
}

impl BaudRate {
    pub fn kbps(&self) -> Option<u32> {
        match self {
            Self::Undefined => None,
            Self::Nbr106 => Some(106),
            Self::Nbr212 => Some(212),
            Self::Nbr424 => Some(424),
            Self::Nbr847 => Some(847),
        }
    }
}

/// Modulation used to select a target: family plus bit rate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulation {
    pub modulation_type: ModulationType,
    pub baud_rate: BaudRate,
}

impl Modulation {
    /// ISO14443-A at 106 kbps, the modulation used for IsoDep activation.
    pub const ISO14443A_106: Self = Self::new(ModulationType::Iso14443a, BaudRate::Nbr106);

    pub const fn new(modulation_type: ModulationType, baud_rate: BaudRate) -> Self {
        Self {
            modulation_type,
            baud_rate,
        }
    }
}

/// Boolean reader properties a driver can toggle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    HandleCrc,
    HandleParity,
    ActivateField,
    ActivateCrypto1,
    InfiniteSelect,
    AcceptInvalidFrames,
    AcceptMultipleFrames,
    /// Let the reader run RATS and the ISO14443-4 handshake on selection.
    AutoIso14443_4,
    EasyFraming,
    ForceIso14443a,
    ForceIso14443b,
    ForceSpeed106,
}

/// Connection state of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}
