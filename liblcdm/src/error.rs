// liblcdm-rs/liblcdm/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("link is closed")]
    LinkClosed,

    #[error("link is already open")]
    LinkAlreadyOpen,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport はオプション依存なので feature で切り替える
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("read tries exceeded after {attempts} attempts")]
    ReadExhausted { attempts: usize },

    #[error("response not acknowledged")]
    ResponseNotAcknowledged,

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("invalid payload length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid count field at offset {offset}: {bytes:02x?}")]
    InvalidCountField { offset: usize, bytes: [u8; 2] },

    #[error("count {count} out of range (max {max})")]
    CountOutOfRange { count: u8, max: u8 },

    #[error("unsupported baud rate: {0}")]
    UnsupportedBaudRate(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
