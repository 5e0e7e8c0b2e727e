// nfctag/src/driver/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{DriverCall, MockDriver};
pub use traits::Driver;
