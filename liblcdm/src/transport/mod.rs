// liblcdm-rs/liblcdm/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::{MockTransport, SharedMock};
#[cfg(feature = "serial")]
pub use serial::{SerialConnector, SerialTransport};
pub use traits::{Connector, Transport};
