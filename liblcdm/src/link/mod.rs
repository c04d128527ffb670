// liblcdm-rs/liblcdm/src/link/mod.rs
//! Response side of the link: control byte classification, frame
//! reassembly and validation, acknowledgement and settling.

pub mod reader;
pub mod settle;

pub use reader::FrameReader;
pub use settle::{NoSettle, Settle, ThreadSleep};
