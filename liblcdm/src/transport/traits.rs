// liblcdm-rs/liblcdm/src/transport/traits.rs

use crate::Result;
use crate::config::LinkConfig;

/// Transport trait abstracts the byte stream away from protocol/device logic.
pub trait Transport: Send {
    /// Write raw bytes to the dispenser
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read whatever bytes are available into `buf`, waiting at most the
    /// configured per-read timeout. Returns the number of bytes read; `0`
    /// means the timeout elapsed without data.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Release the underlying stream. The default implementation has
    /// nothing to release.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Opens transports for a link configuration. A session keeps its connector
/// so it can be closed and reopened.
pub trait Connector: Send {
    fn connect(&mut self, config: &LinkConfig) -> Result<Box<dyn Transport>>;
}

impl<F> Connector for F
where
    F: FnMut(&LinkConfig) -> Result<Box<dyn Transport>> + Send,
{
    fn connect(&mut self, config: &LinkConfig) -> Result<Box<dyn Transport>> {
        self(config)
    }
}
