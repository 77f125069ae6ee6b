//! Font resources
//!
//! Fonts are requested by opaque resource id when the watchface loads and
//! handed back when it unloads.

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoFont};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

pub type Font = &'static MonoFont<'static>;

/// Opaque font resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResourceId(pub u32);

/// Large font for the time
pub const TIME_FONT: ResourceId = ResourceId(1);
/// Small font for the battery percentage
pub const BATTERY_FONT: ResourceId = ResourceId(2);

/// Used in place of a font that could not be loaded
pub const FALLBACK_FONT: Font = &FONT_10X20;

pub trait FontResources {
    /// Look up and load a font, `None` if the id is unknown.
    fn load_font(&mut self, id: ResourceId) -> Option<Font>;

    /// Release a font returned by `load_font`.
    fn unload_font(&mut self, font: Font);
}

/// Built-in fonts from the ProFont family
#[derive(Debug, Default)]
pub struct ProFontResources {
    loaded: u8,
}

impl ProFontResources {
    pub const fn new() -> Self {
        Self { loaded: 0 }
    }

    /// Number of fonts currently handed out
    pub fn loaded(&self) -> u8 {
        self.loaded
    }
}

impl FontResources for ProFontResources {
    fn load_font(&mut self, id: ResourceId) -> Option<Font> {
        let font: Font = match id {
            TIME_FONT => &PROFONT_24_POINT,
            BATTERY_FONT => &PROFONT_14_POINT,
            _ => return None,
        };
        self.loaded += 1;
        trace!("Loaded font {}", id);
        Some(font)
    }

    fn unload_font(&mut self, _font: Font) {
        self.loaded = self.loaded.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_loaded_fonts() {
        let mut resources = ProFontResources::new();
        let time = resources.load_font(TIME_FONT).unwrap();
        let battery = resources.load_font(BATTERY_FONT).unwrap();
        assert_eq!(resources.loaded(), 2);
        assert_eq!(time.character_size, PROFONT_24_POINT.character_size);
        assert_eq!(battery.character_size, PROFONT_14_POINT.character_size);

        resources.unload_font(time);
        resources.unload_font(battery);
        assert_eq!(resources.loaded(), 0);
    }

    #[test]
    fn unknown_id() {
        let mut resources = ProFontResources::new();
        assert!(resources.load_font(ResourceId(99)).is_none());
        assert_eq!(resources.loaded(), 0);
    }
}
