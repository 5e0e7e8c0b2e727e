// nfctag/src/constants.rs
//! Common protocol constants used across the crate

/// SAK bit announcing ISO/IEC 14443-4 compliance
pub const ISO14443_4_COMPATIBLE: u8 = 0x20;

/// Largest UID a reader reports during anti-collision (triple size UID)
pub const MAX_UID_LEN: usize = 10;

/// Response buffer size used for APDU transceive unless the driver says otherwise
pub const MAX_APDU_RESPONSE_LEN: usize = 254;

/// Maximum data length encodable with a single-byte Lc
pub const MAX_SHORT_APDU_DATA_LEN: usize = 255;

/// Transceive timeout meaning "use the driver's default"
pub const DEFAULT_TRANSCEIVE_TIMEOUT_MS: i32 = 0;

/// ISO 7816-4 SELECT command: CLA / INS / P1 (select by DF name) / P2 (first occurrence)
pub const SELECT_CLA: u8 = 0x00;
pub const SELECT_INS: u8 = 0xA4;
pub const SELECT_P1_BY_NAME: u8 = 0x04;
pub const SELECT_P2_FIRST: u8 = 0x00;

/// Status word reported by a card on normal processing
pub const SW_SUCCESS: u16 = 0x9000;
