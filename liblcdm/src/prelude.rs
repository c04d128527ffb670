// liblcdm-rs/liblcdm/src/prelude.rs

pub use crate::config::LinkConfig;
pub use crate::device::{Dispenser, DispenserBuilder};
pub use crate::link::{NoSettle, Settle, ThreadSleep};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{Connector, Transport};
pub use crate::{
    Baud, CashboxStatus, ControlByte, CountEncoding, DeviceStatus, DispenseCounts,
    DispenseReport, DualDispenseReport, Error, Result, RomVersion, SensorStatus, StatusCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{Hex, default_read_timeout, default_settle_delay, ms};
