//! Time and battery display strings
//!
//! Both formatters are pure: the caller reads the clock or the power source,
//! hands the reading in and writes the returned text wherever it draws.

use core::fmt::Write;

use chrono::Timelike;
use heapless::String;

use crate::error::Error;

/// Rendered time, `H:MM` or `HH:MM`
pub type TimeText = String<6>;

/// Rendered charge, `0%` up to `100%`
pub type BatteryText = String<4>;

/// 12 or 24 hour clock preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl ClockStyle {
    pub fn is_24h(self) -> bool {
        self == ClockStyle::TwentyFourHour
    }
}

/// Local wall clock time with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeReading {
    hour: u8,
    minute: u8,
}

impl TimeReading {
    /// Create a reading from an hour (0–23) and a minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(Error::InvalidTime { hour, minute })
        }
    }

    /// Take hour and minute from any chrono time value.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12 hour dial, midnight and noon both read 12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }
}

/// Battery state as reported by the power source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    /// Charge in percent, nominally 0–100
    pub percent: u8,
    /// Whether the watch is on the charger
    pub charging: bool,
}

impl BatteryReading {
    pub const fn new(percent: u8, charging: bool) -> Self {
        Self { percent, charging }
    }
}

/// Format a time reading for display.
///
/// 24 hour style yields `HH:MM`. 12 hour style maps the hour onto 1–12
/// without a leading zero, so 09:05 becomes `9:05`. No AM/PM marker is added.
pub fn format_time(time: TimeReading, style: ClockStyle) -> TimeText {
    let mut text = TimeText::new();
    // Hour and minute have at most two digits each, at most 5 bytes in total
    let _ = if style.is_24h() {
        write!(text, "{:02}:{:02}", time.hour(), time.minute())
    } else {
        write!(text, "{}:{:02}", time.hour12(), time.minute())
    };
    text
}

/// Format a battery reading as `<percent>%`.
///
/// The value is not clamped; anything a `u8` holds fits the buffer.
pub fn format_battery(battery: BatteryReading) -> BatteryText {
    let mut text = BatteryText::new();
    // At most three digits and the percent sign
    let _ = write!(text, "{}%", battery.percent);
    text
}
