// nfctag/src/apdu/parser.rs

use crate::apdu::StatusWord;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Split a raw response into its data field and trailing status word.
pub fn split_status(raw: &[u8]) -> Result<(&[u8], StatusWord)> {
    ensure_len(raw, 2)?;
    let (data, sw) = raw.split_at(raw.len() - 2);
    Ok((data, StatusWord::from_bytes(sw[0], sw[1])))
}
