use core::convert::Infallible;
use std::cell::Cell;

use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::Rectangle,
};
use ndot_watchface::{
    config::{Shape, WatchfaceConfig},
    format::{BatteryReading, ClockStyle, TimeReading},
    resources::{Font, FontResources, ProFontResources, ResourceId, FALLBACK_FONT},
    tick::TimeUnit,
    ui::{App, DefaultWatchface, Environment, Event},
};

/// In-memory 240x240 screen
struct Framebuffer {
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    fn new() -> Self {
        Self {
            pixels: vec![Rgb565::RED; 240 * 240],
        }
    }

    fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.pixels[(p.y * 240 + p.x) as usize] == color)
            .count()
    }

    fn region(&self, area: &Rectangle) -> Vec<Rgb565> {
        area.points()
            .map(|p| self.pixels[(p.y * 240 + p.x) as usize])
            .collect()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(240, 240)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.bounding_box().contains(point) {
                self.pixels[(point.y * 240 + point.x) as usize] = color;
            }
        }
        Ok(())
    }
}

/// Clock and battery the test can move around
struct Watch {
    time: Cell<(u8, u8)>,
    style: ClockStyle,
    battery: Cell<BatteryReading>,
}

impl Watch {
    fn new(hour: u8, minute: u8, style: ClockStyle) -> Self {
        Self {
            time: Cell::new((hour, minute)),
            style,
            battery: Cell::new(BatteryReading::new(64, false)),
        }
    }
}

impl Environment for Watch {
    fn local_time(&self) -> TimeReading {
        let (hour, minute) = self.time.get();
        TimeReading::new(hour, minute).unwrap()
    }

    fn clock_style(&self) -> ClockStyle {
        self.style
    }

    fn battery(&self) -> BatteryReading {
        self.battery.get()
    }
}

fn app(config: WatchfaceConfig) -> App<DefaultWatchface<ProFontResources>> {
    let mut app = App::new(DefaultWatchface::new(config, ProFontResources::new()));
    app.subscribe_tick(TimeUnit::Minute);
    app.subscribe_battery();
    app
}

#[test]
fn load_draws_time_and_battery() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(13, 30, ClockStyle::TwelveHour);
    let mut app = app(WatchfaceConfig::new());

    app.handle(Event::Load, &watch, &mut screen).unwrap();

    let face = app.watchface();
    assert_eq!(face.time_text(), Some("1:30"));
    assert_eq!(face.battery_text(), Some("64%"));
    assert_eq!(face.resources().loaded(), 2);

    // Window cleared to white, text drawn in black inside both regions
    assert_eq!(screen.count_in(&screen.bounding_box(), Rgb565::RED), 0);
    let time = face.time_layer().unwrap().bounds();
    let battery = face.battery_layer().unwrap().bounds();
    assert!(screen.count_in(&time, Rgb565::BLACK) > 0);
    assert!(screen.count_in(&battery, Rgb565::BLACK) > 0);
}

#[test]
fn minute_tick_redraws_time_only() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(9, 59, ClockStyle::TwentyFourHour);
    let mut app = app(WatchfaceConfig::new());
    app.handle(Event::Load, &watch, &mut screen).unwrap();
    assert_eq!(app.watchface().time_text(), Some("09:59"));

    let time = app.watchface().time_layer().unwrap().bounds();
    let battery = app.watchface().battery_layer().unwrap().bounds();
    let battery_before = screen.region(&battery);
    let time_before = screen.region(&time);

    watch.time.set((10, 0));
    app.handle(Event::Tick(TimeUnit::Hour), &watch, &mut screen).unwrap();

    assert_eq!(app.watchface().time_text(), Some("10:00"));
    assert_ne!(screen.region(&time), time_before);
    assert_eq!(screen.region(&battery), battery_before);
}

#[test]
fn second_tick_keeps_time() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(8, 15, ClockStyle::TwentyFourHour);
    let mut app = app(WatchfaceConfig::new());
    app.handle(Event::Load, &watch, &mut screen).unwrap();

    watch.time.set((8, 16));
    app.handle(Event::Tick(TimeUnit::Second), &watch, &mut screen).unwrap();
    assert_eq!(app.watchface().time_text(), Some("08:15"));

    app.handle(Event::Tick(TimeUnit::Minute), &watch, &mut screen).unwrap();
    assert_eq!(app.watchface().time_text(), Some("08:16"));
}

#[test]
fn battery_change_redraws_battery() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(0, 5, ClockStyle::TwelveHour);
    let mut app = app(WatchfaceConfig::new());
    app.handle(Event::Load, &watch, &mut screen).unwrap();
    assert_eq!(app.watchface().time_text(), Some("12:05"));

    let time = app.watchface().time_layer().unwrap().bounds();
    let time_before = screen.region(&time);

    app.handle(Event::Battery(BatteryReading::new(100, true)), &watch, &mut screen)
        .unwrap();
    assert_eq!(app.watchface().battery_text(), Some("100%"));
    assert_eq!(screen.region(&time), time_before);

    app.handle(Event::Battery(BatteryReading::new(7, false)), &watch, &mut screen)
        .unwrap();
    assert_eq!(app.watchface().battery_text(), Some("7%"));
}

#[test]
fn unload_releases_fonts() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(12, 0, ClockStyle::TwentyFourHour);
    let mut app = app(WatchfaceConfig::new());

    app.handle(Event::Load, &watch, &mut screen).unwrap();
    app.handle(Event::Unload, &watch, &mut screen).unwrap();

    let face = app.watchface();
    assert_eq!(face.resources().loaded(), 0);
    assert_eq!(face.time_text(), None);
    assert_eq!(face.battery_text(), None);

    // Nothing is drawn for events after teardown
    let before = screen.region(&screen.bounding_box());
    app.handle(Event::Battery(BatteryReading::new(3, false)), &watch, &mut screen)
        .unwrap();
    assert_eq!(screen.region(&screen.bounding_box()), before);
}

#[test]
fn round_screen_layout() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(18, 45, ClockStyle::TwentyFourHour);
    let mut app = app(WatchfaceConfig {
        shape: Shape::Round,
        ..WatchfaceConfig::new()
    });
    app.handle(Event::Load, &watch, &mut screen).unwrap();

    let face = app.watchface();
    assert_eq!(
        face.time_layer().unwrap().bounds(),
        Rectangle::new(Point::new(0, 100), Size::new(240, 60))
    );
    assert_eq!(
        face.battery_layer().unwrap().bounds(),
        Rectangle::new(Point::new(0, 205), Size::new(240, 30))
    );
}

/// Resource table that knows no fonts at all
#[derive(Default)]
struct Empty {
    unloaded: u32,
}

impl FontResources for Empty {
    fn load_font(&mut self, _id: ResourceId) -> Option<Font> {
        None
    }

    fn unload_font(&mut self, _font: Font) {
        self.unloaded += 1;
    }
}

#[test]
fn missing_fonts_fall_back() {
    let mut screen = Framebuffer::new();
    let watch = Watch::new(7, 7, ClockStyle::TwelveHour);
    let mut app = App::new(DefaultWatchface::new(WatchfaceConfig::new(), Empty::default()));

    app.handle(Event::Load, &watch, &mut screen).unwrap();
    let layer = app.watchface().time_layer().unwrap();
    assert_eq!(layer.font().character_size, FALLBACK_FONT.character_size);
    assert_eq!(app.watchface().time_text(), Some("7:07"));

    // Fallback fonts are never handed back
    app.handle(Event::Unload, &watch, &mut screen).unwrap();
    assert_eq!(app.watchface().resources().unloaded, 0);
}
