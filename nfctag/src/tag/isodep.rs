// nfctag/src/tag/isodep.rs

//! ISO/IEC 14443-4 ("IsoDep") tags: protocol activation and APDU exchange.

use std::fmt;
use std::ops::Shl;

use log::{debug, trace, warn};

use crate::apdu::{Command, Response};
use crate::device::{Device, Initialized};
use crate::tag::{Connection, GenericTag, Tag};
use crate::target::Target;
use crate::types::{Modulation, Property};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Smartcard-grade tag speaking ISO/IEC 7816-4 APDUs over ISO14443-4.
pub struct IsoDepTag<'a> {
    base: GenericTag<'a>,
}

impl<'a> IsoDepTag<'a> {
    pub fn new(target: &'a Target, device: &'a Device<Initialized>) -> Self {
        Self {
            base: GenericTag::new(target, device),
        }
    }

    fn transceive_apdu(&self, apdu: &[u8]) -> Result<Response> {
        let device = self.base.device();
        let mut rx = vec![0u8; device.max_response_len()];

        trace!("TX: {}", bytes_to_hex_spaced(apdu));
        let res = device.transceive_bytes(apdu, &mut rx, device.transceive_timeout_ms());
        if res < 0 {
            return Err(Error::TransceiveFailed(res));
        }

        let len = res as usize;
        if len > rx.len() {
            return Err(Error::InvalidLength {
                expected: rx.len(),
                actual: len,
            });
        }
        trace!("RX: {}", bytes_to_hex_spaced(&rx[..len]));

        Response::decode(&rx[..len])
    }
}

impl Tag for IsoDepTag<'_> {
    /// SAK announces ISO/IEC 14443-4 compliance.
    fn matches(target: &Target) -> bool {
        target.is_iso14443_4()
    }

    fn base(&self) -> &GenericTag<'_> {
        &self.base
    }

    /// Enable automatic ISO14443-4 activation, then select the target as
    /// ISO14443-A at 106 kbps. A non-positive select result fails the
    /// connect with the driver code.
    fn activate(&self) -> Result<()> {
        let device = self.base.device();
        device.set_property_bool(Property::AutoIso14443_4, true);

        let res = device.select_passive_target(Modulation::ISO14443A_106, self.base.uid());
        if res <= 0 {
            debug!("activation of {} failed: {}", self.base.uid_hex(), res);
            return Err(Error::SelectFailed(res));
        }
        debug!("activated {}", self.base.uid_hex());
        Ok(())
    }

    fn disconnect(&self) {
        let res = self.base.device().deselect_target();
        if res != 0 {
            warn!("deselect of {} reported {}", self.base.uid_hex(), res);
        }
    }
}

impl Connection<'_, IsoDepTag<'_>> {
    /// Send a raw command APDU. Only a driver-level failure (negative length)
    /// is an error; any status word is returned for the caller to inspect.
    pub fn send_apdu(&self, apdu: &[u8]) -> Result<Response> {
        self.transceive_apdu(apdu)
    }

    /// Like [`send_apdu`](Self::send_apdu), but a status word other than 9000
    /// becomes [`Error::Status`].
    pub fn send_apdu_checked(&self, apdu: &[u8]) -> Result<Response> {
        let response = self.transceive_apdu(apdu)?;
        response.ensure_success()?;
        Ok(response)
    }

    /// Encode and send a command.
    pub fn transmit(&self, command: &Command) -> Result<Response> {
        self.transceive_apdu(&command.encode())
    }

    /// SELECT the application `aid` by name. The response is returned without
    /// looking at its status word.
    pub fn select(&self, aid: &[u8]) -> Result<Response> {
        self.transmit(&Command::select_by_name(aid)?)
    }

    /// SELECT the application `aid` by name, failing unless the card answers
    /// 9000 (e.g. [`StatusError::FileNotFound`](crate::apdu::StatusError::FileNotFound)
    /// when the application is absent).
    pub fn select_checked(&self, aid: &[u8]) -> Result<()> {
        self.select(aid)?.ensure_success()?;
        Ok(())
    }
}

/// `&conn << apdu` is shorthand for `conn.send_apdu(apdu)`.
impl<'b> Shl<&'b [u8]> for &Connection<'_, IsoDepTag<'_>> {
    type Output = Result<Response>;

    fn shl(self, apdu: &'b [u8]) -> Result<Response> {
        self.send_apdu(apdu)
    }
}

impl<'b> Shl<&'b Command> for &Connection<'_, IsoDepTag<'_>> {
    type Output = Result<Response>;

    fn shl(self, command: &'b Command) -> Result<Response> {
        self.transmit(command)
    }
}

impl fmt::Display for IsoDepTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}
