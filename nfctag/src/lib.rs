// nfctag/src/lib.rs

//! nfctag
//!
//! Sessions with contactless tags over a reader driver: presence checks,
//! protocol dispatch, ISO/IEC 14443-4 activation and ISO/IEC 7816-4 APDU
//! exchange.
//!
//! ```
//! use nfctag::prelude::*;
//! use nfctag::driver::MockDriver;
//!
//! let mock = MockDriver::new();
//! mock.push_select_result(1);
//! mock.push_reply(vec![0x90, 0x00]);
//!
//! let device = DeviceBuilder::new()
//!     .with_driver(Box::new(mock.clone()))
//!     .build_uninitialized()?
//!     .initialize()?;
//! let target = Target::builder()
//!     .uid_bytes(&[0x04, 0x8a, 0x2b, 0x72])?
//!     .sak(0x20)
//!     .build()?;
//!
//! if let AnyTag::IsoDep(tag) = device.tag(&target) {
//!     tag.session(|conn| conn.select_checked(&[0xA0, 0x00, 0x00, 0x00, 0x03]))?;
//! }
//! # Ok::<(), nfctag::Error>(())
//! ```

pub mod apdu;
pub mod constants;
pub mod device;
pub mod driver;
pub mod error;
pub mod prelude;
pub mod tag;
pub mod target;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the types in `types` are available for consumers and for convenient
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;
