//! Error codes for the collaborator boundaries

use ufmt::{uDisplay, uWrite, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raw LED number outside the matrix
    LedOutOfRange(u8),
    /// Analog conversion reported a fault
    EntropySample,
}

impl uDisplay for Error {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::LedOutOfRange(led) => {
                f.write_str("led out of range: ")?;
                uDisplay::fmt(led, f)
            }
            Error::EntropySample => f.write_str("entropy sample failed"),
        }
    }
}
