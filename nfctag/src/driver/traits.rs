// nfctag/src/driver/traits.rs

use crate::Result;
use crate::constants::MAX_APDU_RESPONSE_LEN;
use crate::types::{Modulation, Property};

/// Driver trait abstracts the reader hardware away from tag protocol logic.
///
/// Methods returning `i32` keep the reader's integer conventions so the tag
/// layer can embed the raw code in its errors:
/// `select_passive_target` succeeds with a value >= 1, `deselect_target` and
/// `set_property_bool` succeed with 0, `transceive_bytes` returns the number of
/// received bytes or a negative error code.
pub trait Driver {
    /// Open and initialize the reader.
    fn initialize(&mut self) -> Result<()>;

    /// Select a passive target with the given modulation and initiator data
    /// (the UID for ISO14443-A). Returns the number of selected targets.
    fn select_passive_target(&mut self, modulation: Modulation, init_data: &[u8]) -> i32;

    /// Release the currently selected target.
    fn deselect_target(&mut self) -> i32;

    /// Send `tx` to the selected target and receive into `rx`. A timeout of 0
    /// keeps the driver default.
    fn transceive_bytes(&mut self, tx: &[u8], rx: &mut [u8], timeout_ms: i32) -> i32;

    /// Toggle a boolean reader property.
    fn set_property_bool(&mut self, property: Property, enable: bool) -> i32;

    /// Largest APDU response the driver can deliver in one transceive.
    fn max_response_len(&self) -> usize {
        MAX_APDU_RESPONSE_LEN
    }
}
