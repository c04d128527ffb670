//! Hexadecimal helpers used for frame tracing.
//!
//! Frames are rendered in upper case with one space between bytes, the way
//! dispenser manuals print them (`04 50 02 46 03 13`).

use std::fmt;

/// Lazily formatted hex view of a byte slice, for use inside `log` macros so
/// nothing is allocated when the record is filtered out.
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
