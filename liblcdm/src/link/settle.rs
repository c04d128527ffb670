// liblcdm-rs/liblcdm/src/link/settle.rs

use std::time::Duration;

/// The settling step the dispenser requires after the host acknowledges a
/// response frame. Blocking and not cancellable.
pub trait Settle: Send {
    fn settle(&mut self, delay: Duration);
}

/// Production settle: sleeps the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Settle for ThreadSleep {
    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Skips the pause entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSettle;

impl Settle for NoSettle {
    fn settle(&mut self, _delay: Duration) {}
}
