//! Watchface configuration

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::{
    format::ClockStyle,
    resources::{ResourceId, BATTERY_FONT, TIME_FONT},
};

/// Screen outline, decides where the text regions go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    #[default]
    Rect,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub text: Rgb565,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchfaceConfig {
    /// 12 or 24 hour clock
    pub clock_style: ClockStyle,
    pub shape: Shape,
    pub palette: Palette,
    /// Font resource for the time
    pub time_font: ResourceId,
    /// Font resource for the battery percentage
    pub battery_font: ResourceId,
    /// Offset of local time from UTC in seconds
    pub utc_offset: i32,
    /// Backlight brightness (0–7)
    pub backlight: u8,
}

impl WatchfaceConfig {
    /// PineTime defaults: black on white, 24 hour clock, CET
    pub const fn new() -> Self {
        Self {
            clock_style: ClockStyle::TwentyFourHour,
            shape: Shape::Rect,
            palette: Palette {
                background: Rgb565::WHITE,
                text: Rgb565::BLACK,
            },
            time_font: TIME_FONT,
            battery_font: BATTERY_FONT,
            utc_offset: 3_600,
            backlight: 2,
        }
    }
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self::new()
    }
}
