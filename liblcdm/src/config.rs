// liblcdm-rs/liblcdm/src/config.rs
//! Link configuration shared by the session, the frame reader and the
//! transports.

use std::time::Duration;

use crate::constants::DEFAULT_MAX_READ_ATTEMPTS;
use crate::types::{Baud, CountEncoding};
use crate::utils::timeout::{default_read_timeout, default_settle_delay};

/// Everything needed to open and drive one dispenser link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Port name or path, e.g. `/dev/ttyUSB0` or `COM4`
    pub path: String,
    pub baud: Baud,
    /// Per-read timeout handed to the transport
    pub read_timeout: Duration,
    /// Trace frames and control bytes through `log`
    pub verbose: bool,
    pub count_encoding: CountEncoding,
    pub max_read_attempts: usize,
    /// Pause after acknowledging a response frame
    pub settle_delay: Duration,
}

impl LinkConfig {
    pub fn new(path: impl Into<String>, baud: Baud) -> Self {
        Self {
            path: path.into(),
            baud,
            ..Self::default()
        }
    }

    pub fn read_policy(&self) -> ReadPolicy {
        ReadPolicy {
            max_attempts: self.max_read_attempts,
            settle_delay: self.settle_delay,
            verbose: self.verbose,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            baud: Baud::default(),
            read_timeout: default_read_timeout(),
            verbose: false,
            count_encoding: CountEncoding::default(),
            max_read_attempts: DEFAULT_MAX_READ_ATTEMPTS,
            settle_delay: default_settle_delay(),
        }
    }
}

/// The subset of `LinkConfig` the frame reader needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPolicy {
    pub max_attempts: usize,
    pub settle_delay: Duration,
    pub verbose: bool,
}

impl Default for ReadPolicy {
    fn default() -> Self {
        LinkConfig::default().read_policy()
    }
}
