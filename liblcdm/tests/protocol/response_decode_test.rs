use super::common;

use liblcdm::protocol::{Command, Response, ResponseFrame};
use liblcdm::types::{CashboxStatus, CountEncoding, DispenseCounts, StatusCode};

#[test]
fn status_response_decodes_to_status_variant() {
    let frame = ResponseFrame::decode(&common::fixtures::status_frame()).unwrap();
    match Response::decode(&Command::Status, &frame.payload, CountEncoding::default()).unwrap() {
        Response::Status(s) => {
            assert_eq!(s.status, StatusCode::GOOD);
            assert!(s.sensors.check_sensor_1);
            assert!(!s.sensors.check_sensor_2);
            assert!(s.sensors.divert_sensor_1);
            assert!(s.sensors.cashbox_upper);
        }
        other => panic!("expected status response, got {:?}", other),
    }
}

#[test]
fn dual_dispense_decodes_both_cassettes() {
    let payload = common::fixtures::dual_dispense_payload();
    let cmd = Command::Dispense { upper: 2, lower: 3 };
    match Response::decode(&cmd, &payload, CountEncoding::AsciiDecimal).unwrap() {
        Response::Dispense(r) => {
            assert_eq!(r.upper, DispenseCounts { check: 2, exit: 2 });
            assert_eq!(r.lower, DispenseCounts { check: 3, exit: 3 });
            assert_eq!(r.status, StatusCode::NORMAL_STOP);
            assert_eq!(r.cashbox, CashboxStatus::NEAR_END);
        }
        other => panic!("expected dispense response, got {:?}", other),
    }
}

#[test]
fn rom_version_decodes_strings() {
    let payload = common::fixtures::rom_version_payload();
    match Response::decode(&Command::RomVersion, &payload, CountEncoding::default()).unwrap() {
        Response::RomVersion(v) => {
            assert_eq!(v.model, "A1");
            assert_eq!(v.version, "1234");
        }
        other => panic!("expected rom version response, got {:?}", other),
    }
}
