// liblcdm-rs/liblcdm/src/protocol/codec.rs

use log::debug;

use crate::Result;
use crate::types::CountEncoding;

use super::ResponseFrame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full request frame (with STX/ETX/BCC).
pub fn encode_command_frame(cmd: &Command, encoding: CountEncoding) -> Result<Vec<u8>> {
    cmd.encode(encoding)
}

/// Decode the payload of a validated response frame for the command that
/// was sent. An echo byte that differs from the command code is logged and
/// otherwise ignored.
pub fn decode_response(
    cmd: &Command,
    frame: &ResponseFrame,
    encoding: CountEncoding,
) -> Result<Response> {
    if frame.echo != cmd.command_code() {
        debug!(
            "response echoes {:#04x} for command {:#04x}",
            frame.echo,
            cmd.command_code()
        );
    }
    Response::decode(cmd, &frame.payload, encoding)
}
