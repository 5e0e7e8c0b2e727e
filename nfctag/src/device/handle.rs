// nfctag/src/device/handle.rs

use std::cell::RefCell;
use std::marker::PhantomData;

use log::{debug, info};

use crate::Result;
use crate::constants::DEFAULT_TRANSCEIVE_TIMEOUT_MS;
use crate::driver::Driver;
use crate::tag::AnyTag;
use crate::target::Target;
use crate::types::{Modulation, Property};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Settings applied to every exchange on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Passed to every transceive; 0 keeps the driver default.
    pub transceive_timeout_ms: i32,
    /// Response buffer size; `None` uses the driver's own limit.
    pub max_response_len: Option<usize>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            transceive_timeout_ms: DEFAULT_TRANSCEIVE_TIMEOUT_MS,
            max_response_len: None,
        }
    }
}

/// Reader handle that enforces initialization state at compile time.
///
/// The driver sits behind a `RefCell` so any number of tags can borrow the
/// initialized device at once; every driver call is a short exclusive borrow.
/// The handle is not `Sync`: sharing it across threads needs the caller's own
/// locking.
pub struct Device<State = Uninitialized> {
    driver: RefCell<Box<dyn Driver>>,
    config: DeviceConfig,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Driver instance, e.g. a MockDriver.
    pub fn new_with_driver(driver: Box<dyn Driver>) -> Self {
        Self::with_config(driver, DeviceConfig::default())
    }

    pub fn with_config(driver: Box<dyn Driver>, config: DeviceConfig) -> Self {
        Self {
            driver: RefCell::new(driver),
            config,
            _state: PhantomData,
        }
    }

    /// Open the reader. Returns an initialized Device on success.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut driver = self.driver.into_inner();
        driver.initialize()?;

        let config = DeviceConfig {
            max_response_len: Some(
                self.config
                    .max_response_len
                    .unwrap_or_else(|| driver.max_response_len()),
            ),
            ..self.config
        };
        info!(
            "reader initialized (timeout {} ms, max response {} bytes)",
            config.transceive_timeout_ms,
            config.max_response_len.unwrap_or_default()
        );

        Ok(Device {
            driver: RefCell::new(driver),
            config,
            _state: PhantomData,
        })
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}

impl Device<Initialized> {
    /// Wrap a discovered target in the most specific tag protocol.
    pub fn tag<'a>(&'a self, target: &'a Target) -> AnyTag<'a> {
        AnyTag::new(target, self)
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn transceive_timeout_ms(&self) -> i32 {
        self.config.transceive_timeout_ms
    }

    pub fn max_response_len(&self) -> usize {
        self.config
            .max_response_len
            .unwrap_or(crate::constants::MAX_APDU_RESPONSE_LEN)
    }

    /// Raw passive-target selection; >= 1 means a target was selected.
    pub fn select_passive_target(&self, modulation: Modulation, init_data: &[u8]) -> i32 {
        let res = self
            .driver
            .borrow_mut()
            .select_passive_target(modulation, init_data);
        debug!("select_passive_target({:?}) -> {}", modulation.modulation_type, res);
        res
    }

    /// Raw deselect; 0 means success.
    pub fn deselect_target(&self) -> i32 {
        self.driver.borrow_mut().deselect_target()
    }

    /// Raw transceive; returns the received length or a negative code.
    pub fn transceive_bytes(&self, tx: &[u8], rx: &mut [u8], timeout_ms: i32) -> i32 {
        self.driver.borrow_mut().transceive_bytes(tx, rx, timeout_ms)
    }

    /// Raw property toggle; 0 means success.
    pub fn set_property_bool(&self, property: Property, enable: bool) -> i32 {
        let res = self.driver.borrow_mut().set_property_bool(property, enable);
        debug!("set_property_bool({:?}, {}) -> {}", property, enable, res);
        res
    }
}
