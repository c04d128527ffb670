use liblcdm::transport::mock::MockTransport;
use liblcdm::transport::{SharedMock, Transport};

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x06, 0x01]);
    m.send(&[0xAA]).unwrap();
    assert_eq!(m.sent, vec![vec![0xAA]]);

    let mut buf = [0u8; 1];
    assert_eq!(m.receive(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], 0x06);
    // remainder of the chunk comes back on the next read
    assert_eq!(m.receive(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], 0x01);
    // empty queue behaves like a timed out read
    assert_eq!(m.receive(&mut buf).unwrap(), 0);
    assert_eq!(m.reads, 3);
}

#[test]
fn shared_mock_clones_see_the_same_state() {
    let shared = SharedMock::default();
    let mut handle = shared.clone();
    handle.send(&[0x15]).unwrap();
    handle.close().unwrap();
    assert_eq!(shared.inner().sent, vec![vec![0x15]]);
    assert!(shared.inner().closed);
}
