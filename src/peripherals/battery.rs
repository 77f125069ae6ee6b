//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};
use ndot_watchface::{
    format::BatteryReading,
    power::{millivolts_from_adc, percent_from_millivolts},
};

/// Battery configuration
struct BatteryConfig<'a> {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
}

/// Battery API
pub struct Battery {
    /// Battery configuration
    config: BatteryConfig<'static>,
    /// Last reading
    reading: BatteryReading,
}

impl Battery {
    /// Configure battery settings on boot and take a first reading
    pub async fn init(adc: Saadc<'static, 1>, charge_pin: Input<'static, P0_12>) -> Self {
        let mut battery = Self {
            config: BatteryConfig {
                adc,
                pin_charge_indication: charge_pin,
            },
            reading: BatteryReading::default(),
        };
        battery.reading = battery.sample().await;
        battery
    }

    /// Return the stored reading. To fetch current data, call `update()` first.
    pub fn reading(&self) -> BatteryReading {
        self.reading
    }

    /// Read charge and charging state from the hardware.
    /// Return whether either of them changed.
    pub async fn update(&mut self) -> bool {
        let reading = self.sample().await;
        let changed = reading != self.reading;
        self.reading = reading;
        changed
    }

    async fn sample(&mut self) -> BatteryReading {
        let charging = self.config.pin_charge_indication.is_low();

        let mut buf = [0; 1];
        self.config.adc.sample(&mut buf).await;
        let percent = match millivolts_from_adc(buf[0]) {
            Ok(millivolts) => percent_from_millivolts(millivolts),
            Err(e) => {
                // Keep the last known charge
                defmt::warn!("Battery measurement failed: {}", e);
                self.reading.percent
            }
        };

        BatteryReading::new(percent, charging)
    }
}
