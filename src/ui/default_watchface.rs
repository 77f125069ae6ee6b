//! Default watchface
//!
//! Large time in the middle of the screen, battery percentage at the bottom.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565, text::Alignment};

use super::{Environment, Layout, TextLayer, WatchFace};
use crate::{
    config::WatchfaceConfig,
    format::{format_battery, format_time, BatteryReading},
    resources::{Font, FontResources, ResourceId, FALLBACK_FONT},
};

/// Layers and fonts that only exist while the watchface is loaded
struct Layers {
    time: TextLayer<6>,
    battery: TextLayer<4>,
    /// Fonts to hand back on unload, `None` where the fallback is in use
    fonts: [Option<Font>; 2],
}

/// Basic default watchface
pub struct DefaultWatchface<R> {
    config: WatchfaceConfig,
    resources: R,
    layers: Option<Layers>,
}

impl<R> DefaultWatchface<R>
where
    R: FontResources,
{
    pub fn new(config: WatchfaceConfig, resources: R) -> Self {
        Self {
            config,
            resources,
            layers: None,
        }
    }

    /// Currently displayed time, `None` while unloaded
    pub fn time_text(&self) -> Option<&str> {
        self.layers.as_ref().map(|layers| layers.time.text())
    }

    /// Currently displayed battery percentage, `None` while unloaded
    pub fn battery_text(&self) -> Option<&str> {
        self.layers.as_ref().map(|layers| layers.battery.text())
    }

    pub fn time_layer(&self) -> Option<&TextLayer<6>> {
        self.layers.as_ref().map(|layers| &layers.time)
    }

    pub fn battery_layer(&self) -> Option<&TextLayer<4>> {
        self.layers.as_ref().map(|layers| &layers.battery)
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    fn load_font(&mut self, id: ResourceId) -> Option<Font> {
        let font = self.resources.load_font(id);
        if font.is_none() {
            warn!("Font {} not found, using fallback", id);
        }
        font
    }

    fn styled<const N: usize>(&self, layer: &mut TextLayer<N>) {
        layer.set_background_color(self.config.palette.background);
        layer.set_text_color(self.config.palette.text);
        layer.set_alignment(Alignment::Center);
    }

    fn update_time<E, D>(&mut self, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(layers) = self.layers.as_mut() {
            let text = format_time(env.local_time(), env.clock_style());
            debug!("Time: {}", text.as_str());
            layers.time.set_text(text);
            layers.time.draw(target)?;
        }
        Ok(())
    }

    fn update_battery<D>(&mut self, battery: BatteryReading, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(layers) = self.layers.as_mut() {
            let text = format_battery(battery);
            debug!("Battery: {}", text.as_str());
            layers.battery.set_text(text);
            layers.battery.draw(target)?;
        }
        Ok(())
    }
}

impl<R> WatchFace for DefaultWatchface<R>
where
    R: FontResources,
{
    fn load<E, D>(&mut self, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = Layout::new(self.config.shape, target.bounding_box());

        let time_font = self.load_font(self.config.time_font);
        let mut time = TextLayer::new(layout.time, time_font.unwrap_or(FALLBACK_FONT));
        self.styled(&mut time);

        let battery_font = self.load_font(self.config.battery_font);
        let mut battery = TextLayer::new(layout.battery, battery_font.unwrap_or(FALLBACK_FONT));
        self.styled(&mut battery);

        self.layers = Some(Layers {
            time,
            battery,
            fonts: [time_font, battery_font],
        });

        target.clear(self.config.palette.background)?;
        self.update_time(env, target)?;
        self.update_battery(env.battery(), target)
    }

    fn unload(&mut self) {
        if let Some(layers) = self.layers.take() {
            for font in layers.fonts.into_iter().flatten() {
                self.resources.unload_font(font);
            }
        }
    }

    fn on_tick<E, D>(&mut self, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>,
    {
        self.update_time(env, target)
    }

    fn on_battery<D>(&mut self, battery: BatteryReading, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.update_battery(battery, target)
    }

    fn is_loaded(&self) -> bool {
        self.layers.is_some()
    }
}
