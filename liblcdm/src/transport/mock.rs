// liblcdm-rs/liblcdm/src/transport/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and hands out
/// queued response chunks, one chunk per read.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Number of `receive` calls made so far
    pub reads: usize,
    /// Testing hook: number of upcoming reads that should fail with an I/O error
    pub read_failures: usize,
    pub closed: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent reads should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Queue a chunk to be returned by a future read. An empty chunk
    /// simulates a read that timed out.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.reads += 1;
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "simulated read failure",
            )));
        }
        if self.responses.is_empty() {
            // Nothing queued: behave like a read timeout
            return Ok(0);
        }

        let chunk = &mut self.responses[0];
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        // Keep the remainder of an oversized chunk for the next read
        if n < chunk.len() {
            *chunk = chunk.split_off(n);
        } else {
            self.responses.remove(0);
        }
        Ok(n)
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// `MockTransport` behind `Arc<Mutex<_>>` so a test can keep inspecting the
/// mock after handing a clone to a session, from any thread.
#[derive(Debug, Clone, Default)]
pub struct SharedMock(Arc<Mutex<MockTransport>>);

impl SharedMock {
    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner().push_response(resp);
    }

    /// Lock the inner mock for assertions. A panic in another test thread
    /// does not hide the recorded state.
    pub fn inner(&self) -> MutexGuard<'_, MockTransport> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner().send(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.inner().receive(buf)
    }

    fn close(&mut self) -> Result<()> {
        self.inner().close()
    }
}
