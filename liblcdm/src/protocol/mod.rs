// liblcdm-rs/liblcdm/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::bcc;
pub use commands::Command;
pub use frame::{ResponseFrame, encode_request};
pub use responses::Response;
