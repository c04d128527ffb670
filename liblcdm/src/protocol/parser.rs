// liblcdm-rs/liblcdm/src/protocol/parser.rs

use crate::types::CountEncoding;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Decode the two-byte count field at `idx` using `encoding`.
pub fn count_at(data: &[u8], idx: usize, encoding: CountEncoding) -> Result<u8> {
    ensure_len(data, idx + 2)?;
    encoding.decode([data[idx], data[idx + 1]], idx)
}

/// Text field at `idx`. Non-UTF-8 bytes are replaced rather than rejected.
pub fn text_at(data: &[u8], idx: usize, len: usize) -> Result<String> {
    let s = slice_at(data, idx, len)?;
    Ok(String::from_utf8_lossy(s).into_owned())
}
