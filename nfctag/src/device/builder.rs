// nfctag/src/device/builder.rs

use crate::device::handle::{Device, DeviceConfig, Uninitialized};
use crate::driver::Driver;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    driver: Option<Box<dyn Driver>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created driver instance (e.g. MockDriver)
    pub fn with_driver(mut self, driver: Box<dyn Driver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Timeout passed to every transceive; 0 keeps the driver default.
    pub fn transceive_timeout_ms(mut self, timeout_ms: i32) -> Self {
        self.config.transceive_timeout_ms = timeout_ms;
        self
    }

    /// Override the APDU response buffer size.
    pub fn max_response_len(mut self, len: usize) -> Self {
        self.config.max_response_len = Some(len);
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a driver to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.driver {
            Some(d) => Ok(Device::with_config(d, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
