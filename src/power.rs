//! Battery charge estimation
//!
//! Conversion factors from https://wiki.pine64.org/wiki/PineTime.

use crate::error::Error;

/// Convert a 12 bit SAADC sample of the halved battery voltage into millivolts.
pub fn millivolts_from_adc(raw: i16) -> Result<u16, Error> {
    match raw {
        0..=4095 => {
            // Multiply by 2 * 1000 for mV and divide by (2 ^ 12 / 3.3V reference).
            // Use u32 during calculation to prevent overflow
            Ok((raw as u32 * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the remaining capacity in percent from the battery voltage.
///
/// Linear interpolation between fixed points of the LiPo discharge curve.
pub fn percent_from_millivolts(millivolts: u16) -> u8 {
    (match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    }) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_boundaries() {
        assert_eq!(percent_from_millivolts(0), 0);
        assert_eq!(percent_from_millivolts(3449), 0);
        assert_eq!(percent_from_millivolts(3450), 0);
        assert_eq!(percent_from_millivolts(3699), 49);
        assert_eq!(percent_from_millivolts(3700), 50);
        assert_eq!(percent_from_millivolts(4199), 99);
        assert_eq!(percent_from_millivolts(4200), 100);
        assert_eq!(percent_from_millivolts(u16::MAX), 100);
    }

    #[test]
    fn adc_scaling() {
        assert_eq!(millivolts_from_adc(0), Ok(0));
        assert_eq!(millivolts_from_adc(1241), Ok(2000));
        assert_eq!(millivolts_from_adc(4095), Ok(6599));
    }

    #[test]
    fn adc_rejects_out_of_range() {
        assert_eq!(millivolts_from_adc(-1), Err(Error::InvalidMeasurement));
        assert_eq!(millivolts_from_adc(4096), Err(Error::InvalidMeasurement));
    }
}
