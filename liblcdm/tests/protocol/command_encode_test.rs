use super::common;

use liblcdm::protocol::Command;
use liblcdm::types::CountEncoding;

#[test]
fn status_request_matches_manual() {
    let frame = Command::Status.encode(CountEncoding::default()).unwrap();
    assert_eq!(frame, common::fixtures::status_request());
}

#[test]
fn upper_dispense_count_is_ascii() {
    let frame = Command::UpperDispense { count: 7 }
        .encode(CountEncoding::AsciiDecimal)
        .unwrap();
    assert_eq!(frame[3], 0x45);
    assert_eq!(&frame[4..6], b"07");
    assert_eq!(frame[6], 0x03);
}

#[test]
fn dual_dispense_sends_upper_then_lower() {
    let frame = Command::Dispense { upper: 12, lower: 3 }
        .encode(CountEncoding::AsciiDecimal)
        .unwrap();
    assert_eq!(frame[3], 0x55);
    assert_eq!(&frame[4..8], b"1203");
}
