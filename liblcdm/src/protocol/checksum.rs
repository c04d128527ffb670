// liblcdm-rs/liblcdm/src/protocol/checksum.rs

/// Compute the Block Check Character (BCC) used by LCDM frames.
/// BCC = XOR of every byte from the frame start through ETX.
pub fn bcc(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}
