// liblcdm-rs/liblcdm/src/protocol/commands/dispense.rs

use crate::Result;
use crate::types::CountEncoding;

/// Encode an Upper/LowerDispense payload: one two-byte count field.
pub fn encode_single_dispense(count: u8, encoding: CountEncoding) -> Result<Vec<u8>> {
    Ok(encoding.encode(count)?.to_vec())
}

/// Encode a dual Dispense payload: upper count field then lower count field.
pub fn encode_dispense(upper: u8, lower: u8, encoding: CountEncoding) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(4);
    buf.extend_from_slice(&encoding.encode(upper)?);
    buf.extend_from_slice(&encoding.encode(lower)?);
    Ok(buf)
}
