use super::common;

use liblcdm::protocol::ResponseFrame;
use liblcdm::Error;

#[test]
fn status_frame_payload_matches_fixture() {
    let frame = ResponseFrame::decode(&common::fixtures::status_frame()).expect("frame decode");
    assert_eq!(frame.echo, 0x46);
    assert_eq!(frame.payload, common::fixtures::status_payload());
}

#[test]
fn frame_with_wrong_device_id_is_malformed() {
    let mut raw = common::fixtures::status_frame();
    raw[1] = 0x51;
    assert!(matches!(
        ResponseFrame::decode(&raw),
        Err(Error::MalformedFrame(_))
    ));
}
