// liblcdm-rs/liblcdm/src/device/builder.rs

use std::time::Duration;

use crate::Result;
use crate::config::LinkConfig;
use crate::device::handle::Dispenser;
use crate::link::Settle;
use crate::transport::Connector;
use crate::types::{Baud, CountEncoding};

/// Helper to construct a Dispenser with optional configuration.
pub struct DispenserBuilder {
    config: LinkConfig,
    connector: Option<Box<dyn Connector>>,
    settle: Option<Box<dyn Settle>>,
}

impl DispenserBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            config: LinkConfig {
                path: path.into(),
                ..LinkConfig::default()
            },
            connector: None,
            settle: None,
        }
    }

    pub fn baud(mut self, baud: Baud) -> Self {
        self.config.baud = baud;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn count_encoding(mut self, encoding: CountEncoding) -> Self {
        self.config.count_encoding = encoding;
        self
    }

    pub fn max_read_attempts(mut self, attempts: usize) -> Self {
        self.config.max_read_attempts = attempts;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    /// Provide the connector used to open the link (e.g. a mock).
    pub fn with_connector(mut self, connector: Box<dyn Connector>) -> Self {
        self.connector = Some(connector);
        self
    }

    pub fn with_settle(mut self, settle: Box<dyn Settle>) -> Self {
        self.settle = Some(settle);
        self
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Consume the builder and return a closed Dispenser.
    /// Without an explicit connector the serial port connector is used when
    /// the `serial` feature is enabled; otherwise this fails.
    pub fn build(self) -> Result<Dispenser> {
        let connector = match self.connector {
            Some(c) => c,
            None => default_connector()?,
        };
        let dispenser = Dispenser::new(self.config, connector);
        Ok(match self.settle {
            Some(s) => dispenser.with_settle(s),
            None => dispenser,
        })
    }

    /// Build and open the link.
    pub fn connect(self) -> Result<Dispenser> {
        let mut dispenser = self.build()?;
        dispenser.open()?;
        Ok(dispenser)
    }
}

#[cfg(feature = "serial")]
fn default_connector() -> Result<Box<dyn Connector>> {
    Ok(Box::new(crate::transport::SerialConnector))
}

#[cfg(not(feature = "serial"))]
fn default_connector() -> Result<Box<dyn Connector>> {
    Err(crate::Error::Transport(
        "no connector configured and the `serial` feature is disabled".into(),
    ))
}
