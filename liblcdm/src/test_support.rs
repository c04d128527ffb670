//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::LinkConfig;
use crate::constants::ACK;
use crate::device::Dispenser;
use crate::link::Settle;
use crate::protocol::ResponseFrame;
use crate::transport::{Connector, SharedMock, Transport};
use crate::{Result, types};

/// Settle implementation that records each requested delay instead of
/// sleeping. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSettle(Arc<Mutex<Vec<Duration>>>);

impl RecordingSettle {
    pub fn delays(&self) -> Vec<Duration> {
        self.log().clone()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<Duration>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Settle for RecordingSettle {
    fn settle(&mut self, delay: Duration) {
        self.log().push(delay);
    }
}

/// Connector that hands out clones of `mock` on every connect.
#[doc(hidden)]
pub fn mock_connector(mock: SharedMock) -> impl Connector + 'static {
    move |_: &LinkConfig| -> Result<Box<dyn Transport>> { Ok(Box::new(mock.clone())) }
}

/// The bytes a dispenser sends for an accepted command: ACK then the
/// response frame.
#[doc(hidden)]
pub fn acked_response(echo: u8, payload: &[u8]) -> Vec<Vec<u8>> {
    vec![vec![ACK], ResponseFrame::encode(echo, payload)]
}

/// Push each chunk onto the shared mock in order.
#[doc(hidden)]
pub fn seed_responses(mock: &SharedMock, chunks: Vec<Vec<u8>>) {
    for c in chunks {
        mock.push_response(c);
    }
}

/// Convenience: an open Dispenser backed by `mock` that records settle
/// delays instead of sleeping.
#[doc(hidden)]
pub fn open_mock_dispenser(
    mock: &SharedMock,
    encoding: types::CountEncoding,
) -> Result<(Dispenser, RecordingSettle)> {
    let settle = RecordingSettle::default();
    let config = LinkConfig {
        path: "mock".into(),
        count_encoding: encoding,
        ..LinkConfig::default()
    };
    let dispenser = Dispenser::connect(config, Box::new(mock_connector(mock.clone())))?
        .with_settle(Box::new(settle.clone()));
    Ok((dispenser, settle))
}
