// liblcdm-rs/liblcdm/src/protocol/commands/mod.rs

pub mod dispense;
pub mod system;

pub use dispense::{encode_dispense, encode_single_dispense};
pub use system::{encode_reset, encode_rom_version, encode_status};

use crate::Result;
use crate::constants::{
    CMD_DISPENSE, CMD_LOWER_DISPENSE, CMD_RESET, CMD_ROM_VERSION, CMD_STATUS, CMD_UPPER_DISPENSE,
};
use crate::protocol::frame::encode_request;
use crate::types::CountEncoding;

/// High-level Command enum. New commands should be added here and
/// their payload encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Reset,
    UpperDispense { count: u8 },
    LowerDispense { count: u8 },
    /// Dispense from both cassettes in one request
    Dispense { upper: u8, lower: u8 },
    RomVersion,
}

impl Command {
    /// Return the command code byte sent after STX.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Status => CMD_STATUS,
            Self::Reset => CMD_RESET,
            Self::UpperDispense { .. } => CMD_UPPER_DISPENSE,
            Self::LowerDispense { .. } => CMD_LOWER_DISPENSE,
            Self::Dispense { .. } => CMD_DISPENSE,
            Self::RomVersion => CMD_ROM_VERSION,
        }
    }

    /// Encode the command parameters (the bytes between the command code
    /// and ETX).
    pub fn payload(&self, encoding: CountEncoding) -> Result<Vec<u8>> {
        match *self {
            Self::Status => Ok(encode_status()),
            Self::Reset => Ok(encode_reset()),
            Self::UpperDispense { count } | Self::LowerDispense { count } => {
                encode_single_dispense(count, encoding)
            }
            Self::Dispense { upper, lower } => encode_dispense(upper, lower, encoding),
            Self::RomVersion => Ok(encode_rom_version()),
        }
    }

    /// Encode the command into a complete request frame.
    pub fn encode(&self, encoding: CountEncoding) -> Result<Vec<u8>> {
        let payload = self.payload(encoding)?;
        Ok(encode_request(self.command_code(), &[&payload]))
    }
}
