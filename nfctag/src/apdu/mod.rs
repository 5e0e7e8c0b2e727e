// nfctag/src/apdu/mod.rs

pub mod command;
pub mod parser;
pub mod response;
pub mod status;

pub use command::Command;
pub use response::Response;
pub use status::{StatusError, StatusWord};
