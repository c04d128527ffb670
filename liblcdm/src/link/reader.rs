// liblcdm-rs/liblcdm/src/link/reader.rs

use log::{debug, warn};

use crate::config::ReadPolicy;
use crate::constants::{ACK, READ_CHUNK_LEN};
use crate::link::settle::Settle;
use crate::protocol::frame::{ResponseFrame, is_complete};
use crate::transport::Transport;
use crate::types::ControlByte;
use crate::utils::Hex;
use crate::{Error, Result};

/// Reads one response cycle from a transport.
///
/// The reader owns the reassembly buffer for the cycle. Bytes that arrive in
/// the same read as the control byte are kept and become the start of the
/// data frame.
pub struct FrameReader<'a> {
    transport: &'a mut dyn Transport,
    settle: &'a mut dyn Settle,
    policy: ReadPolicy,
    pending: Vec<u8>,
}

impl<'a> FrameReader<'a> {
    pub fn new(
        transport: &'a mut dyn Transport,
        settle: &'a mut dyn Settle,
        policy: ReadPolicy,
    ) -> Self {
        Self {
            transport,
            settle,
            policy,
            pending: Vec::new(),
        }
    }

    /// Read and classify the control byte, then read the data frame if the
    /// dispenser acknowledged the request.
    pub fn read_response(&mut self) -> Result<ResponseFrame> {
        let control = self.read_control_byte()?;
        if !control.is_ack() {
            debug!("request declined by dispenser: {}", control);
            return Err(Error::ResponseNotAcknowledged);
        }
        self.read_data_frame()
    }

    /// Wait for at least one byte and classify the first one.
    pub fn read_control_byte(&mut self) -> Result<ControlByte> {
        self.fill_until(|buf| !buf.is_empty())?;
        let control = ControlByte::classify(self.pending.remove(0));
        if self.policy.verbose {
            debug!("<- {}", control);
        }
        Ok(control)
    }

    /// Reassemble and validate a data frame, acknowledge it and settle.
    ///
    /// Reassembly stops at the first buffer `is_complete` accepts, so a
    /// payload containing ETX can yield a shorter frame that still passes
    /// validation (see `is_complete`).
    pub fn read_data_frame(&mut self) -> Result<ResponseFrame> {
        self.fill_until(is_complete)?;
        let buf = std::mem::take(&mut self.pending);

        let frame = ResponseFrame::decode(&buf).inspect_err(|e| {
            warn!("<- {} ({})", Hex(&buf), e);
        })?;
        if self.policy.verbose {
            debug!("<- {}", Hex(&frame.payload));
        }

        self.transport.send(&[ACK])?;
        if self.policy.verbose {
            debug!("-> ACK");
        }
        self.settle.settle(self.policy.settle_delay);

        Ok(frame)
    }

    /// Read from the transport until `done` accepts the buffer. Performs at
    /// most `policy.max_attempts` reads.
    fn fill_until(&mut self, done: impl Fn(&[u8]) -> bool) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK_LEN];
        let mut attempts = 0;
        while !done(self.pending.as_slice()) {
            if attempts == self.policy.max_attempts {
                return Err(Error::ReadExhausted { attempts });
            }
            attempts += 1;
            let n = self.transport.receive(&mut chunk)?;
            self.pending.extend_from_slice(&chunk[..n.min(chunk.len())]);
        }
        Ok(())
    }
}
