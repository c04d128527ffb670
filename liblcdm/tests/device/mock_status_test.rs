use super::common;

use std::time::Duration;

use liblcdm::types::{CountEncoding, StatusCode};

#[test]
fn status_over_mock_link() {
    common::init_logging();
    let chunks = vec![vec![0x06], common::fixtures::status_frame()];
    let (mut dev, mock, settle) =
        common::dispenser_with(chunks, CountEncoding::default()).unwrap();

    let status = dev.status().unwrap();
    assert_eq!(status.status, StatusCode::GOOD);
    assert!(status.status.is_success());
    assert!(status.sensors.check_sensor_1);
    assert!(status.sensors.divert_sensor_1);
    assert!(status.sensors.cashbox_upper);
    assert!(!status.sensors.solenoid_sensor);

    let sent = mock.inner().sent.clone();
    assert_eq!(sent, vec![common::fixtures::status_request(), vec![0x06]]);
    assert_eq!(settle.delays(), vec![Duration::from_millis(200)]);
}

#[test]
fn status_frame_split_into_single_bytes() {
    let mut chunks = vec![vec![0x06]];
    chunks.extend(common::fixtures::status_frame().into_iter().map(|b| vec![b]));
    let (mut dev, mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::default()).unwrap();

    dev.status().unwrap();
    let frame_len = common::fixtures::status_frame().len();
    assert_eq!(mock.inner().reads, frame_len + 1);
}

#[test]
fn corrupted_status_frame_is_not_acknowledged() {
    let mut frame = common::fixtures::status_frame();
    frame[4] ^= 0x01;
    let (mut dev, mock, settle) =
        common::dispenser_with(vec![vec![0x06], frame], CountEncoding::default()).unwrap();

    match dev.status() {
        Err(liblcdm::Error::ChecksumMismatch { .. }) => {}
        other => panic!("expected ChecksumMismatch, got: {:?}", other),
    }
    // only the request went out
    assert_eq!(mock.inner().sent.len(), 1);
    assert!(settle.delays().is_empty());
}

#[test]
fn short_status_payload_is_invalid_length() {
    let chunks = common::acked_response(0x46, &[0x30, 0x00]);
    let (mut dev, _mock, _settle) =
        common::dispenser_with(chunks, CountEncoding::default()).unwrap();
    assert!(matches!(
        dev.status(),
        Err(liblcdm::Error::InvalidLength { expected: 3, actual: 2 })
    ));
}
