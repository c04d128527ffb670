// liblcdm-rs/liblcdm/src/device/handle.rs

use log::{debug, info};

use crate::config::LinkConfig;
use crate::constants::{ACK, NACK};
use crate::link::{FrameReader, Settle, ThreadSleep};
use crate::protocol::codec::{decode_response, encode_command_frame};
use crate::protocol::{Command, Response};
use crate::transport::{Connector, Transport};
use crate::types::{DeviceStatus, DispenseReport, DualDispenseReport, RomVersion};
use crate::utils::Hex;
use crate::{Error, Result};

/// A link session with one dispenser.
///
/// The session is open while it holds a transport. Every method takes
/// `&mut self`, so a single owner serialises commands and open/close
/// transitions. The session is `Send`; share it across threads behind a
/// `Mutex` if needed.
pub struct Dispenser {
    config: LinkConfig,
    connector: Box<dyn Connector>,
    settle: Box<dyn Settle>,
    transport: Option<Box<dyn Transport>>,
}

impl Dispenser {
    /// Create a closed session. Call `open` before issuing commands.
    pub fn new(config: LinkConfig, connector: Box<dyn Connector>) -> Self {
        Self {
            config,
            connector,
            settle: Box::new(ThreadSleep),
            transport: None,
        }
    }

    /// Create a session and open it immediately.
    pub fn connect(config: LinkConfig, connector: Box<dyn Connector>) -> Result<Self> {
        let mut this = Self::new(config, connector);
        this.open()?;
        Ok(this)
    }

    /// Replace the settling step run after each acknowledged response.
    pub fn with_settle(mut self, settle: Box<dyn Settle>) -> Self {
        self.settle = settle;
        self
    }

    pub fn open(&mut self) -> Result<()> {
        if self.transport.is_some() {
            return Err(Error::LinkAlreadyOpen);
        }
        let transport = self.connector.connect(&self.config)?;
        self.transport = Some(transport);
        info!("link {} open", self.config.path);
        Ok(())
    }

    /// Close the link. The session counts as closed even if releasing the
    /// transport fails.
    pub fn close(&mut self) -> Result<()> {
        let mut transport = self.transport.take().ok_or(Error::LinkClosed)?;
        info!("link {} closed", self.config.path);
        transport.close()
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Send a command and return the decoded response.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let transport = self.transport.as_deref_mut().ok_or(Error::LinkClosed)?;

        let request = encode_command_frame(&cmd, self.config.count_encoding)?;
        if self.config.verbose {
            debug!("-> {}", Hex(&request));
        }
        transport.send(&request)?;

        let mut reader = FrameReader::new(transport, &mut *self.settle, self.config.read_policy());
        let frame = reader.read_response()?;

        decode_response(&cmd, &frame, self.config.count_encoding)
    }

    /// Query the dispenser status and sensor flags.
    pub fn status(&mut self) -> Result<DeviceStatus> {
        match self.execute(Command::Status)? {
            Response::Status(s) => Ok(s),
            other => Err(unexpected(other)),
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        match self.execute(Command::Reset)? {
            Response::Reset => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Dispense `count` bills from the upper cassette.
    pub fn upper_dispense(&mut self, count: u8) -> Result<DispenseReport> {
        match self.execute(Command::UpperDispense { count })? {
            Response::UpperDispense(r) => Ok(r),
            other => Err(unexpected(other)),
        }
    }

    /// Dispense `count` bills from the lower cassette.
    pub fn lower_dispense(&mut self, count: u8) -> Result<DispenseReport> {
        match self.execute(Command::LowerDispense { count })? {
            Response::LowerDispense(r) => Ok(r),
            other => Err(unexpected(other)),
        }
    }

    /// Dispense from both cassettes in one request.
    pub fn dispense(&mut self, upper: u8, lower: u8) -> Result<DualDispenseReport> {
        match self.execute(Command::Dispense { upper, lower })? {
            Response::Dispense(r) => Ok(r),
            other => Err(unexpected(other)),
        }
    }

    pub fn rom_version(&mut self) -> Result<RomVersion> {
        match self.execute(Command::RomVersion)? {
            Response::RomVersion(v) => Ok(v),
            other => Err(unexpected(other)),
        }
    }

    /// Write a bare ACK to the link.
    pub fn ack(&mut self) -> Result<()> {
        self.send_control(ACK)
    }

    /// Write a bare NAK to the link, asking the dispenser to resend.
    pub fn nack(&mut self) -> Result<()> {
        self.send_control(NACK)
    }

    fn send_control(&mut self, byte: u8) -> Result<()> {
        let transport = self.transport.as_deref_mut().ok_or(Error::LinkClosed)?;
        transport.send(&[byte])
    }
}

// Response::decode is keyed on the command, so a mismatch here is a bug in
// the dispatch table rather than anything the dispenser sent.
fn unexpected(resp: Response) -> Error {
    Error::MalformedFrame(format!("response does not match command: {:?}", resp))
}
