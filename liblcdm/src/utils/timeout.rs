//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the default link timings and
//! provide a small conversion helper so tests and code can express timeouts
//! in milliseconds clearly.

use std::time::Duration;

/// Default per-read timeout in milliseconds handed to the transport.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

/// Pause the dispenser needs after the host acknowledges a response.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Convenience: default settling delay as Duration.
pub fn default_settle_delay() -> Duration {
    ms(DEFAULT_SETTLE_DELAY_MS)
}
