use super::common;

use liblcdm::transport::SharedMock;
use liblcdm::types::{Baud, CountEncoding};
use liblcdm::{DispenserBuilder, Error, NoSettle};

#[test]
fn builder_opens_session_over_connector() -> anyhow::Result<()> {
    common::init_logging();
    let mock = SharedMock::default();
    let mut dev = DispenserBuilder::new("/dev/ttyMOCK")
        .baud(Baud::B19200)
        .verbose(true)
        .with_connector(Box::new(liblcdm::test_support::mock_connector(mock.clone())))
        .with_settle(Box::new(NoSettle))
        .connect()?;

    assert!(dev.is_open());
    assert_eq!(dev.config().path, "/dev/ttyMOCK");
    assert_eq!(dev.config().baud, Baud::B19200);

    dev.close()?;
    assert!(!dev.is_open());
    assert!(mock.inner().closed);
    Ok(())
}

#[test]
fn open_twice_and_close_twice_are_errors() {
    let (mut dev, _mock, _settle) =
        common::dispenser_with(vec![], CountEncoding::default()).unwrap();
    assert!(matches!(dev.open(), Err(Error::LinkAlreadyOpen)));
    dev.close().unwrap();
    assert!(matches!(dev.close(), Err(Error::LinkClosed)));
}

#[test]
fn closed_session_rejects_every_command() {
    let (mut dev, mock, _settle) =
        common::dispenser_with(vec![], CountEncoding::default()).unwrap();
    dev.close().unwrap();

    assert!(matches!(dev.status(), Err(Error::LinkClosed)));
    assert!(matches!(dev.reset(), Err(Error::LinkClosed)));
    assert!(matches!(dev.upper_dispense(1), Err(Error::LinkClosed)));
    assert!(matches!(dev.lower_dispense(1), Err(Error::LinkClosed)));
    assert!(matches!(dev.dispense(1, 1), Err(Error::LinkClosed)));
    assert!(matches!(dev.rom_version(), Err(Error::LinkClosed)));
    assert!(matches!(dev.nack(), Err(Error::LinkClosed)));
    assert!(mock.inner().sent.is_empty());
}

#[test]
fn declined_request_leaves_session_usable() {
    let mut chunks = vec![vec![0x04]];
    chunks.extend(common::acked_response(0x44, &[]));
    let (mut dev, mock, settle) =
        common::dispenser_with(chunks, CountEncoding::default()).unwrap();

    assert!(matches!(dev.reset(), Err(Error::ResponseNotAcknowledged)));
    assert!(dev.is_open());
    dev.reset().unwrap();

    // two requests and one ACK for the accepted response
    assert_eq!(mock.inner().sent.len(), 3);
    assert_eq!(settle.delays().len(), 1);
}
