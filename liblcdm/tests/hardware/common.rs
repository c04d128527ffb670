use liblcdm::{Dispenser, DispenserBuilder, Result};

/// Port to talk to, taken from `LCDM_PORT` (e.g. `/dev/ttyUSB0`).
pub fn port() -> Option<String> {
    std::env::var("LCDM_PORT").ok()
}

pub fn open_dispenser() -> Result<Option<Dispenser>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(path) = port() else {
        eprintln!("LCDM_PORT not set; skipping hardware test");
        return Ok(None);
    };
    DispenserBuilder::new(path).verbose(true).connect().map(Some)
}
