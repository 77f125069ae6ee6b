//! UI definitions module
//!
//! The system owns the event loop and the screen; a watchface only reacts to
//! the events [`App`] hands it and draws into the target it is given.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{
    format::{BatteryReading, ClockStyle, TimeReading},
    tick::TimeUnit,
};

mod default_watchface;
mod layer;

pub use default_watchface::DefaultWatchface;
pub use layer::{Layout, TextLayer};

/// Readings the watchface queries from the system whenever it redraws
pub trait Environment {
    /// Current local time
    fn local_time(&self) -> TimeReading;

    /// Whether the user prefers a 24 hour clock
    fn clock_style(&self) -> ClockStyle;

    /// Latest battery state
    fn battery(&self) -> BatteryReading;
}

/// Lifecycle handlers of a watchface
pub trait WatchFace {
    /// Set up layers and fonts for the target and draw the initial state
    fn load<E, D>(&mut self, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>;

    /// Release everything acquired in `load`
    fn unload(&mut self);

    /// Redraw the time
    fn on_tick<E, D>(&mut self, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>;

    /// Redraw the battery state
    fn on_battery<D>(&mut self, battery: BatteryReading, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;

    fn is_loaded(&self) -> bool;
}

/// Something the system wants the watchface to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The screen is ready to be drawn on
    Load,
    /// The clock advanced, carrying the largest unit that changed
    Tick(TimeUnit),
    /// Charge or charging state changed
    Battery(BatteryReading),
    /// The screen is going away
    Unload,
}

/// Routes system events to a watchface according to its subscriptions.
///
/// Events are handled one at a time, a handler always runs to completion
/// before the next event is dispatched.
pub struct App<W> {
    watchface: W,
    tick_unit: Option<TimeUnit>,
    battery: bool,
}

impl<W> App<W>
where
    W: WatchFace,
{
    /// Create app without any subscriptions
    pub fn new(watchface: W) -> Self {
        Self {
            watchface,
            tick_unit: None,
            battery: false,
        }
    }

    /// Deliver ticks whenever `unit` or a larger unit changes
    pub fn subscribe_tick(&mut self, unit: TimeUnit) {
        self.tick_unit = Some(unit);
    }

    pub fn unsubscribe_tick(&mut self) {
        self.tick_unit = None;
    }

    pub fn subscribe_battery(&mut self) {
        self.battery = true;
    }

    pub fn unsubscribe_battery(&mut self) {
        self.battery = false;
    }

    /// Dispatch a single event.
    ///
    /// Events that do not match the current state or subscriptions are dropped.
    pub fn handle<E, D>(&mut self, event: Event, env: &E, target: &mut D) -> Result<(), D::Error>
    where
        E: Environment,
        D: DrawTarget<Color = Rgb565>,
    {
        let loaded = self.watchface.is_loaded();
        match event {
            Event::Load if !loaded => {
                info!("Loading watchface");
                self.watchface.load(env, target)
            }
            Event::Tick(changed) if loaded && self.wants_tick(changed) => {
                self.watchface.on_tick(env, target)
            }
            Event::Battery(battery) if loaded && self.battery => {
                self.watchface.on_battery(battery, target)
            }
            Event::Unload if loaded => {
                info!("Unloading watchface");
                self.watchface.unload();
                Ok(())
            }
            _ => {
                trace!("Ignoring {}", event);
                Ok(())
            }
        }
    }

    fn wants_tick(&self, changed: TimeUnit) -> bool {
        self.tick_unit
            .map_or(false, |subscribed| changed.covers(subscribed))
    }

    pub fn watchface(&self) -> &W {
        &self.watchface
    }
}
