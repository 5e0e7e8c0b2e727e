// nfctag/src/prelude.rs

pub use crate::apdu::{Command, Response, StatusError, StatusWord};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::driver::Driver;
pub use crate::tag::{AnyTag, Connection, GenericTag, IsoDepTag, Tag, TagKind};
pub use crate::target::{Target, TargetBuilder};
pub use crate::{
    BaudRate, ConnectionState, Error, Modulation, ModulationType, Property, Result, Uid,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
