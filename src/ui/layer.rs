//! Text regions on the watch screen

use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    geometry::{Point, Size},
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb565, RgbColor},
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};

use heapless::String;

use crate::{config::Shape, resources::Font};

/// Rectangular region that renders one short string
pub struct TextLayer<const N: usize> {
    bounds: Rectangle,
    font: Font,
    text_color: Rgb565,
    background_color: Rgb565,
    alignment: Alignment,
    text: String<N>,
}

impl<const N: usize> TextLayer<N> {
    /// Create an empty layer, black on white and left aligned
    pub fn new(bounds: Rectangle, font: Font) -> Self {
        Self {
            bounds,
            font,
            text_color: Rgb565::BLACK,
            background_color: Rgb565::WHITE,
            alignment: Alignment::Left,
            text: String::new(),
        }
    }

    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.background_color = color;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Replace the text, takes effect on the next `draw`.
    pub fn set_text(&mut self, text: String<N>) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Top of the text line, horizontally placed according to the alignment
    fn anchor(&self) -> Point {
        let left = self.bounds.top_left.x;
        let x = match self.alignment {
            Alignment::Left => left,
            Alignment::Center => left + self.bounds.size.width as i32 / 2,
            Alignment::Right => left + self.bounds.size.width as i32 - 1,
        };
        Point::new(x, self.bounds.top_left.y)
    }

    /// Erase the region and draw the current text, clipped to the bounds.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut target = target.clipped(&self.bounds);

        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.background_color))
            .draw(&mut target)?;

        let character_style = MonoTextStyle::new(self.font, self.text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(self.text.as_str(), self.anchor(), character_style, text_style)
            .draw(&mut target)?;

        Ok(())
    }
}

/// Placement of the time and battery regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub time: Rectangle,
    pub battery: Rectangle,
}

impl Layout {
    /// Lay out both regions inside `bounds`.
    ///
    /// Rectangular screens keep the time in the upper middle (60px from the
    /// top on a 144x168 screen), round screens center it vertically and move
    /// the battery a bit further up from the bottom edge.
    pub fn new(shape: Shape, bounds: Rectangle) -> Self {
        let origin = bounds.top_left;
        let w = bounds.size.width;
        let h = bounds.size.height as i32;

        let (time_y, time_h, battery_y, battery_h) = match shape {
            Shape::Rect => (h * 60 / 168, 50, h - 25, 20),
            Shape::Round => (h / 2 - 20, 60, h - 35, 30),
        };

        Self {
            time: Rectangle::new(origin + Point::new(0, time_y), Size::new(w, time_h)),
            battery: Rectangle::new(origin + Point::new(0, battery_y), Size::new(w, battery_h)),
        }
    }
}
