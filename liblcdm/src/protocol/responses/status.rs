// liblcdm-rs/liblcdm/src/protocol/responses/status.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::{DeviceStatus, SensorStatus, StatusCode};

/// Decode a Status response payload
/// Layout: status(1) + sensor_a(1) + sensor_b(1)
pub fn decode_status(data: &[u8]) -> Result<DeviceStatus> {
    const LEN: usize = 3;
    parser::ensure_len(data, LEN)?;

    let status = StatusCode::from(parser::byte_at(data, 0)?);
    let sensors = SensorStatus::from_bytes(parser::byte_at(data, 1)?, parser::byte_at(data, 2)?);

    Ok(DeviceStatus { status, sensors })
}
