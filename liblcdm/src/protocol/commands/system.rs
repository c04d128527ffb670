// liblcdm-rs/liblcdm/src/protocol/commands/system.rs
//! Parameterless commands: Status, Reset and RomVersion carry no payload.

pub fn encode_status() -> Vec<u8> {
    Vec::new()
}

pub fn encode_reset() -> Vec<u8> {
    Vec::new()
}

pub fn encode_rom_version() -> Vec<u8> {
    Vec::new()
}
