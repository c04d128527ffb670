use super::common;

use liblcdm::Error;
use liblcdm::types::{CashboxStatus, CountEncoding, DispenseCounts, StatusCode};

#[test]
fn upper_dispense_reports_counts() {
    let chunks = common::acked_response(0x45, &common::fixtures::upper_dispense_payload());
    let (mut dev, mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::AsciiDecimal).unwrap();

    let report = dev.upper_dispense(7).unwrap();
    assert_eq!(report.counts, DispenseCounts { check: 7, exit: 5 });
    assert_eq!(report.status, StatusCode::GOOD);
    assert_eq!(report.cashbox, CashboxStatus::NORMAL);
    assert_eq!(mock.inner().sent[0], vec![0x04, 0x50, 0x02, 0x45, b'0', b'7', 0x03, 0x17]);
}

#[test]
fn dual_dispense_reports_both_cassettes() {
    let chunks = common::acked_response(0x55, &common::fixtures::dual_dispense_payload());
    let (mut dev, mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::AsciiDecimal).unwrap();

    let report = dev.dispense(2, 3).unwrap();
    assert_eq!(report.upper, DispenseCounts { check: 2, exit: 2 });
    assert_eq!(report.lower, DispenseCounts { check: 3, exit: 3 });
    assert_eq!(report.status, StatusCode::NORMAL_STOP);
    assert!(report.cashbox.is_near_end());
    assert_eq!(&mock.inner().sent[0][3..8], b"\x550203");
}

#[test]
fn raw_binary_lower_dispense() {
    let chunks = common::acked_response(0x55, &[0x00, 0x09, 0x00, 0x08, 0x30, 0x30]);
    let (mut dev, mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::RawBinary).unwrap();

    let report = dev.lower_dispense(9).unwrap();
    assert_eq!(report.counts, DispenseCounts { check: 9, exit: 8 });
    assert_eq!(&mock.inner().sent[0][3..6], &[0x55, 0x00, 0x09]);
}

#[test]
fn garbage_count_field_is_rejected() {
    let chunks = common::acked_response(0x45, b"0x05\x30\x30");
    let (mut dev, _mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::AsciiDecimal).unwrap();
    assert!(matches!(
        dev.upper_dispense(5),
        Err(Error::InvalidCountField { offset: 0, .. })
    ));
}

#[test]
fn oversized_counts_never_reach_the_wire() {
    let (mut dev, mock, _settle) =
        common::dispenser_with(vec![], CountEncoding::AsciiDecimal).unwrap();
    assert!(matches!(
        dev.dispense(5, 120),
        Err(Error::CountOutOfRange { count: 120, max: 99 })
    ));
    assert!(mock.inner().sent.is_empty());
}
