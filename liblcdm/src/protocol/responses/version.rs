// liblcdm-rs/liblcdm/src/protocol/responses/version.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::RomVersion;

/// Decode a RomVersion response payload
/// Layout: reserved(2) + model(2) + version(4)
pub fn decode_rom_version(data: &[u8]) -> Result<RomVersion> {
    parser::ensure_len(data, 8)?;
    Ok(RomVersion {
        model: parser::text_at(data, 2, 2)?,
        version: parser::text_at(data, 4, 4)?,
    })
}
