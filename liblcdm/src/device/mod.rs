// liblcdm-rs/liblcdm/src/device/mod.rs

pub mod builder;
pub mod handle;

pub use builder::DispenserBuilder;
pub use handle::Dispenser;
