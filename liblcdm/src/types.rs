// liblcdm-rs/liblcdm/src/types.rs

use crate::Error;
use crate::constants::{ACK, EOT, NACK};
use derive_more::Display;
use std::fmt;

/// Dispenser status code (1 バイト). Open enumeration: values outside the
/// documented table are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCode(u8);

impl StatusCode {
    pub const GOOD: Self = Self(0x30);
    pub const NORMAL_STOP: Self = Self(0x31);
    pub const PICKUP_ERROR: Self = Self(0x32);
    pub const UPPER_CHECK_SENSOR_JAM: Self = Self(0x33);
    pub const OVERFLOW_BILL: Self = Self(0x34);
    pub const JAM_EXIT_OR_EJECT_SENSOR: Self = Self(0x35);
    pub const JAM_DIVERT_SENSOR: Self = Self(0x36);
    pub const UNDEFINED_COMMAND: Self = Self(0x37);
    pub const UPPER_BILL_END: Self = Self(0x38);
    pub const CHECK_EJECT_COUNT_MISMATCH: Self = Self(0x3A);
    pub const BILL_COUNT_ZERO_OR_OVERFLOW: Self = Self(0x3B);
    pub const DIVERT_TIMEOUT: Self = Self(0x3C);
    pub const BILL_COUNT_ERROR: Self = Self(0x3D);
    pub const SENSOR_ERROR: Self = Self(0x3E);
    pub const REJECT_TRAY_NOT_RECOGNISED: Self = Self(0x3F);
    pub const LOWER_BILL_END: Self = Self(0x40);
    pub const MOTOR_STOP: Self = Self(0x41);
    pub const TIMEOUT_CHECK_EJECT_SENSOR: Self = Self(0x42);
    pub const TIMEOUT_DIVERT_EJECT_SENSOR: Self = Self(0x43);
    pub const NO_UPPER_CASHBOX: Self = Self(0x45);
    pub const NO_LOWER_CASHBOX: Self = Self(0x46);
    pub const DISPENSING_TIMEOUT: Self = Self(0x47);
    pub const EJECT_SENSOR_JAM: Self = Self(0x48);
    pub const DIVERTER_OR_SOLENOID_ERROR: Self = Self(0x49);
    pub const DIVERTER_ABNORMAL: Self = Self(0x4A);
    pub const DIVERT_CHECK_COUNT_MISMATCH: Self = Self(0x4B);
    pub const LOWER_CHECK_SENSOR_JAM: Self = Self(0x4C);
    pub const EJECT_EXIT_COUNT_MISMATCH: Self = Self(0x4D);
    pub const REVERSE_JAM: Self = Self(0x4E);
    pub const WRONG_CASHBOX: Self = Self(0x4F);
    pub const TIMEOUT_CHECK_DIVERT_SENSOR: Self = Self(0x50);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// `true` for the two codes the dispenser reports after a completed
    /// operation.
    pub fn is_success(&self) -> bool {
        *self == Self::GOOD || *self == Self::NORMAL_STOP
    }

    /// Human readable description, `None` for codes outside the table.
    pub fn description(&self) -> Option<&'static str> {
        let s = match *self {
            Self::GOOD => "good",
            Self::NORMAL_STOP => "normal stop",
            Self::PICKUP_ERROR => "pickup error",
            Self::UPPER_CHECK_SENSOR_JAM => "jam at upper check sensor",
            Self::OVERFLOW_BILL => "overflow bill",
            Self::JAM_EXIT_OR_EJECT_SENSOR => "jam at exit or eject sensor",
            Self::JAM_DIVERT_SENSOR => "jam at divert sensor",
            Self::UNDEFINED_COMMAND => "undefined command",
            Self::UPPER_BILL_END => "upper bill end",
            Self::CHECK_EJECT_COUNT_MISMATCH => "check/eject sensor count mismatch",
            Self::BILL_COUNT_ZERO_OR_OVERFLOW => "bill count zero or overflow",
            Self::DIVERT_TIMEOUT => "divert timeout",
            Self::BILL_COUNT_ERROR => "bill count error",
            Self::SENSOR_ERROR => "sensor error",
            Self::REJECT_TRAY_NOT_RECOGNISED => "reject tray not recognised",
            Self::LOWER_BILL_END => "lower bill end",
            Self::MOTOR_STOP => "motor stop",
            Self::TIMEOUT_CHECK_EJECT_SENSOR => "timeout between check and eject sensor",
            Self::TIMEOUT_DIVERT_EJECT_SENSOR => "timeout between divert and eject sensor",
            Self::NO_UPPER_CASHBOX => "no upper cash box",
            Self::NO_LOWER_CASHBOX => "no lower cash box",
            Self::DISPENSING_TIMEOUT => "dispensing timeout",
            Self::EJECT_SENSOR_JAM => "jam at eject sensor",
            Self::DIVERTER_OR_SOLENOID_ERROR => "diverter not operated normally or solenoid sensor error",
            Self::DIVERTER_ABNORMAL => "bills not dispensed, diverter abnormal",
            Self::DIVERT_CHECK_COUNT_MISMATCH => "divert/check sensor count mismatch",
            Self::LOWER_CHECK_SENSOR_JAM => "jam at lower check sensor",
            Self::EJECT_EXIT_COUNT_MISMATCH => "eject/exit sensor count mismatch",
            Self::REVERSE_JAM => "reverse jam",
            Self::WRONG_CASHBOX => "bill dispensed from wrong cash box",
            Self::TIMEOUT_CHECK_DIVERT_SENSOR => "timeout between check and divert sensor",
            _ => return None,
        };
        Some(s)
    }
}

impl From<u8> for StatusCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(d) => write!(f, "{} ({:#04x})", d, self.0),
            None => write!(f, "unknown ({:#04x})", self.0),
        }
    }
}

/// Cash box status code reported after dispensing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashboxStatus(u8);

impl CashboxStatus {
    pub const NORMAL: Self = Self(0x30);
    pub const NEAR_END: Self = Self(0x31);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_near_end(&self) -> bool {
        *self == Self::NEAR_END
    }
}

impl From<u8> for CashboxStatus {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for CashboxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NORMAL => write!(f, "normal"),
            Self::NEAR_END => write!(f, "near end"),
            _ => write!(f, "unknown ({:#04x})", self.0),
        }
    }
}

/// Sensor flags carried by the status response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorStatus {
    pub check_sensor_1: bool,
    pub check_sensor_2: bool,
    pub check_sensor_3: bool,
    pub check_sensor_4: bool,
    pub divert_sensor_1: bool,
    pub divert_sensor_2: bool,
    pub eject_sensor: bool,
    pub exit_sensor: bool,
    pub solenoid_sensor: bool,
    pub upper_near_end: bool,
    pub lower_near_end: bool,
    pub cashbox_upper: bool,
    pub cashbox_lower: bool,
    pub reject_tray: bool,
}

impl SensorStatus {
    /// Build from the two sensor bytes of a status response.
    pub fn from_bytes(a: u8, b: u8) -> Self {
        let bit = |byte: u8, n: u8| byte & (1 << n) != 0;
        Self {
            check_sensor_1: bit(a, 0),
            check_sensor_2: bit(a, 1),
            divert_sensor_1: bit(a, 2),
            divert_sensor_2: bit(a, 3),
            eject_sensor: bit(a, 4),
            exit_sensor: bit(a, 5),
            upper_near_end: bit(a, 6),
            solenoid_sensor: bit(b, 0),
            cashbox_upper: bit(b, 1),
            cashbox_lower: bit(b, 2),
            check_sensor_3: bit(b, 3),
            check_sensor_4: bit(b, 4),
            lower_near_end: bit(b, 5),
            reject_tray: bit(b, 6),
        }
    }
}

/// Decoded status response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceStatus {
    pub status: StatusCode,
    pub sensors: SensorStatus,
}

/// Bills counted at the check and exit sensors of one cassette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display(fmt = "check={} exit={}", check, exit)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispenseCounts {
    pub check: u8,
    pub exit: u8,
}

/// Result of a single-cassette dispense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} [{}] cashbox {}", status, counts, cashbox)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispenseReport {
    pub status: StatusCode,
    pub cashbox: CashboxStatus,
    pub counts: DispenseCounts,
}

/// Result of a dispense from both cassettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} upper [{}] lower [{}] cashbox {}", status, upper, lower, cashbox)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualDispenseReport {
    pub status: StatusCode,
    pub cashbox: CashboxStatus,
    pub upper: DispenseCounts,
    pub lower: DispenseCounts,
}

/// Model code and firmware version reported by the ROM version command
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} {}", model, version)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RomVersion {
    pub model: String,
    pub version: String,
}

/// Classification of the first byte the dispenser sends after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ControlByte {
    #[display(fmt = "ACK")]
    Ack,
    #[display(fmt = "NAK")]
    Nack,
    #[display(fmt = "EOT")]
    Eot,
    #[display(fmt = "unrecognized ({:#04x})", _0)]
    Unrecognized(u8),
}

impl ControlByte {
    pub fn classify(byte: u8) -> Self {
        match byte {
            ACK => Self::Ack,
            NACK => Self::Nack,
            EOT => Self::Eot,
            other => Self::Unrecognized(other),
        }
    }

    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }
}

/// Supported line speeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Baud {
    #[default]
    B9600,
    B19200,
}

impl Baud {
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::B9600 => 9600,
            Self::B19200 => 19200,
        }
    }
}

impl TryFrom<u32> for Baud {
    type Error = Error;

    fn try_from(rate: u32) -> Result<Self, Self::Error> {
        match rate {
            9600 => Ok(Self::B9600),
            19200 => Ok(Self::B19200),
            other => Err(Error::UnsupportedBaudRate(other)),
        }
    }
}

/// How dispense counts are carried on the wire.
///
/// Firmware revisions disagree here: most send two ASCII decimal digits,
/// some send the count split into high and low nibbles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountEncoding {
    #[default]
    AsciiDecimal,
    RawBinary,
}

impl CountEncoding {
    /// Largest count the encoding can carry in its two bytes
    pub fn max_count(&self) -> u8 {
        match self {
            Self::AsciiDecimal => 99,
            Self::RawBinary => u8::MAX,
        }
    }

    /// Encode a count into its two wire bytes.
    pub fn encode(&self, count: u8) -> crate::Result<[u8; 2]> {
        match self {
            Self::AsciiDecimal => {
                let max = self.max_count();
                if count > max {
                    return Err(Error::CountOutOfRange { count, max });
                }
                Ok([b'0' + count / 10, b'0' + count % 10])
            }
            Self::RawBinary => Ok([count >> 4, count & 0x0F]),
        }
    }

    /// Decode two wire bytes into a count. `offset` is only used for error
    /// reporting.
    pub fn decode(&self, bytes: [u8; 2], offset: usize) -> crate::Result<u8> {
        let invalid = Error::InvalidCountField { offset, bytes };
        match self {
            Self::AsciiDecimal => {
                if !bytes.iter().all(u8::is_ascii_digit) {
                    return Err(invalid);
                }
                Ok((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
            }
            Self::RawBinary => {
                if bytes[0] > 0x0F || bytes[1] > 0x0F {
                    return Err(invalid);
                }
                Ok((bytes[0] << 4) | bytes[1])
            }
        }
    }
}
