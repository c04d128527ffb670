use serial_test::serial;

use super::common;

#[test]
#[ignore]
#[serial]
fn lcdm_status_and_version() -> anyhow::Result<()> {
    let Some(mut dev) = common::open_dispenser()? else {
        return Ok(());
    };
    let status = dev.status()?;
    println!("status: {}", status.status);
    let version = dev.rom_version()?;
    println!("rom: {}", version);
    dev.close()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn lcdm_reset() -> anyhow::Result<()> {
    let Some(mut dev) = common::open_dispenser()? else {
        return Ok(());
    };
    dev.reset()?;
    dev.close()?;
    Ok(())
}
