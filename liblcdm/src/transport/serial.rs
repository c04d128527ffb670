// liblcdm-rs/liblcdm/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::config::LinkConfig;
use crate::transport::traits::{Connector, Transport};
use crate::{Error, Result};

/// Serial port transport. The dispenser talks 8N1 without flow control.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open the port named by `config.path` with the configured baud rate
    /// and per-read timeout.
    pub fn open(config: &LinkConfig) -> Result<Self> {
        let port = serialport::new(config.path.as_str(), config.baud.as_u32())
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()?;
        log::info!("opened {} at {} baud", config.path, config.baud.as_u32());
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            // A timed out read is an empty read for the retry loop
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn close(&mut self) -> Result<()> {
        // serialport closes the handle on drop; flush what is pending
        self.port.flush()?;
        Ok(())
    }
}

/// Connector that opens a `SerialTransport` for each `connect` call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialConnector;

impl Connector for SerialConnector {
    fn connect(&mut self, config: &LinkConfig) -> Result<Box<dyn Transport>> {
        Ok(Box::new(SerialTransport::open(config)?))
    }
}
