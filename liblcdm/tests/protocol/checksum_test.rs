use liblcdm::Error;
use liblcdm::protocol::bcc;
use liblcdm::protocol::frame::verify_bcc;

#[test]
fn bcc_examples() {
    assert_eq!(bcc(&[0x04, 0x50, 0x02, 0x46, 0x03]), 0x13);
    assert_eq!(bcc(&[]), 0x00);
}

#[test]
fn verify_bcc_reports_expected_and_actual() {
    match verify_bcc(&[0x01, 0x50, 0x02, 0x46, 0x03, 0x00]) {
        Err(Error::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, 0x16);
            assert_eq!(actual, 0x00);
        }
        other => panic!("expected ChecksumMismatch, got {:?}", other),
    }
}
