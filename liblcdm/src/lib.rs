// liblcdm-rs/liblcdm/src/lib.rs

//! liblcdm
//!
//! Pure Rust serial-link driver for LCDM cash dispensers.
//!
//! A [`Dispenser`] session encodes each command into a request frame, waits
//! for the dispenser's ACK, reassembles and validates the response frame,
//! acknowledges it and decodes the payload into a typed result.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod link;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the result types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
