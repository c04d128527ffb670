// liblcdm-rs/liblcdm/src/protocol/responses/mod.rs

pub mod dispense;
pub mod status;
pub mod version;

pub use dispense::{decode_dual_dispense, decode_single_dispense};
pub use status::decode_status;
pub use version::decode_rom_version;

use crate::protocol::commands::Command;
use crate::types::{CountEncoding, DeviceStatus, DispenseReport, DualDispenseReport, RomVersion};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Status(DeviceStatus),
    Reset,
    UpperDispense(DispenseReport),
    LowerDispense(DispenseReport),
    Dispense(DualDispenseReport),
    RomVersion(RomVersion),
}

impl Response {
    /// Decode a validated response payload for the command that produced it.
    ///
    /// Dispatch is on the command rather than its code because LowerDispense
    /// and the dual Dispense share one code.
    pub fn decode(cmd: &Command, payload: &[u8], encoding: CountEncoding) -> crate::Result<Self> {
        match cmd {
            Command::Status => Ok(Self::Status(decode_status(payload)?)),
            Command::Reset => Ok(Self::Reset),
            Command::UpperDispense { .. } => Ok(Self::UpperDispense(decode_single_dispense(
                payload, encoding,
            )?)),
            Command::LowerDispense { .. } => Ok(Self::LowerDispense(decode_single_dispense(
                payload, encoding,
            )?)),
            Command::Dispense { .. } => Ok(Self::Dispense(decode_dual_dispense(
                payload, encoding,
            )?)),
            Command::RomVersion => Ok(Self::RomVersion(decode_rom_version(payload)?)),
        }
    }
}
