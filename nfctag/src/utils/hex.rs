//! Hexadecimal rendering for UIDs and APDU trace output.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to uppercase hex with a space between bytes, the
/// usual way APDUs are printed.
///
/// Example: `&[0x00, 0xa4]` -> `"00 A4"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}
