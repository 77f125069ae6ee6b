//! Error types shared by the watchface library

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Hour or minute outside of a valid clock reading
    InvalidTime { hour: u8, minute: u8 },
    /// ADC sample outside of the 12 bit range
    InvalidMeasurement,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTime { hour, minute } => write!(f, "invalid time {}:{}", hour, minute),
            Error::InvalidMeasurement => f.write_str("invalid ADC measurement"),
        }
    }
}
