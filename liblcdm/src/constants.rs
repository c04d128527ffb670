// liblcdm-rs/liblcdm/src/constants.rs
//! Common protocol constants used across the crate

/// First byte of every host -> dispenser request frame
pub const REQUEST_START: u8 = 0x04;

/// First byte of every dispenser -> host data frame
pub const RESPONSE_START: u8 = 0x01;

/// Communication identifier of the dispenser (second byte of every frame)
pub const DEVICE_ID: u8 = 0x50;

/// STX: start of the text section
pub const TEXT_START: u8 = 0x02;

/// ETX: end of the text section, followed only by the checksum
pub const TEXT_END: u8 = 0x03;

/// Link-level control bytes sent outside of data frames
pub const ACK: u8 = 0x06;
pub const NACK: u8 = 0x15;
pub const EOT: u8 = 0x04;

/// Command codes
pub const CMD_STATUS: u8 = 0x46;
pub const CMD_RESET: u8 = 0x44;
pub const CMD_UPPER_DISPENSE: u8 = 0x45;
pub const CMD_LOWER_DISPENSE: u8 = 0x55;
/// Dual-cassette dispense shares its code with `CMD_LOWER_DISPENSE`; the two
/// are told apart only by payload length.
pub const CMD_DISPENSE: u8 = 0x55;
pub const CMD_ROM_VERSION: u8 = 0x47;

/// Smallest checksum-stripped response: start, id, STX, echo, ETX
pub const RESPONSE_MIN_STRIPPED_LEN: usize = 5;

/// Offset of the first payload byte in a response frame
pub const RESPONSE_PAYLOAD_OFFSET: usize = 4;

/// Size of the scratch buffer handed to each transport read
pub const READ_CHUNK_LEN: usize = 256;

/// Number of transport reads attempted before giving up on a response
pub const DEFAULT_MAX_READ_ATTEMPTS: usize = 1050;
