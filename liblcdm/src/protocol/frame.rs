// liblcdm-rs/liblcdm/src/protocol/frame.rs

use crate::constants::{
    DEVICE_ID, REQUEST_START, RESPONSE_MIN_STRIPPED_LEN, RESPONSE_PAYLOAD_OFFSET, RESPONSE_START,
    TEXT_END, TEXT_START,
};
use crate::protocol::checksum::bcc;
use crate::{Error, Result};

/// Build a request frame.
/// Format: [0x04] [0x50] [STX] [Cmd] [chunks...] [ETX] [BCC]
pub fn encode_request(command_code: u8, chunks: &[&[u8]]) -> Vec<u8> {
    let body_len: usize = chunks.iter().map(|c| c.len()).sum();
    let mut out = Vec::with_capacity(6 + body_len);
    out.extend_from_slice(&[REQUEST_START, DEVICE_ID, TEXT_START, command_code]);
    for chunk in chunks {
        out.extend_from_slice(chunk);
    }
    out.push(TEXT_END);
    out.push(bcc(&out));
    out
}

/// Split the trailing BCC off `buf` and verify it against the XOR of the
/// remaining bytes. Returns the bytes that precede the BCC.
pub fn verify_bcc(buf: &[u8]) -> Result<&[u8]> {
    let (&actual, body) = buf
        .split_last()
        .ok_or_else(|| Error::MalformedFrame("empty frame".into()))?;
    let expected = bcc(body);
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(body)
}

/// Terminator heuristic used while reassembling a response: the frame is
/// considered complete once ETX sits right before the last byte.
///
/// The dispenser does not send a length field, so a payload byte equal to
/// ETX arriving second-to-last in a partial read ends the frame early. The
/// truncated buffer usually fails `ResponseFrame::decode`, but when the byte
/// after the early ETX equals the BCC of everything before it, the prefix
/// validates as a shorter frame and the rest of the real frame stays in the
/// stream.
pub fn is_complete(buf: &[u8]) -> bool {
    buf.len() > 2 && buf[buf.len() - 2] == TEXT_END
}

/// A validated response frame.
/// Format: [0x01] [0x50] [STX] [Echo] [payload...] [ETX] [BCC]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    /// Byte following STX; the dispenser echoes the command code here.
    pub echo: u8,
    pub payload: Vec<u8>,
}

impl ResponseFrame {
    /// Validate a complete candidate buffer and extract the payload.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < 2 || buf[0] != RESPONSE_START || buf[1] != DEVICE_ID {
            return Err(Error::MalformedFrame("invalid start or device id".into()));
        }

        let body = verify_bcc(buf)?;

        if body.len() < RESPONSE_MIN_STRIPPED_LEN {
            return Err(Error::MalformedFrame(format!(
                "frame too short: {} bytes",
                buf.len()
            )));
        }
        if body[2] != TEXT_START || body[body.len() - 1] != TEXT_END {
            return Err(Error::MalformedFrame("missing STX/ETX".into()));
        }

        Ok(Self {
            echo: body[3],
            payload: body[RESPONSE_PAYLOAD_OFFSET..body.len() - 1].to_vec(),
        })
    }

    /// Build the wire form of a response frame, as the dispenser would send
    /// it. Used by simulators and tests.
    pub fn encode(echo: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(6 + payload.len());
        out.extend_from_slice(&[RESPONSE_START, DEVICE_ID, TEXT_START, echo]);
        out.extend_from_slice(payload);
        out.push(TEXT_END);
        out.push(bcc(&out));
        out
    }
}
